// crates/plastic-layout/src/list.rs
//! Row sizing for list-like content supplied through a delegate.

use plastic_core::{Rect, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexPath {
    pub section: usize,
    pub row: usize,
}

impl IndexPath {
    pub fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

/// Supplies the rows of a sectioned list
pub trait ListDelegate {
    /// Whatever the caller renders for a row
    type Item;

    fn number_of_sections(&self) -> usize;

    fn number_of_rows(&self, section: usize) -> usize;

    fn item(&self, index: IndexPath) -> Self::Item;

    fn row_height(&self, index: IndexPath) -> Value;

    /// Whether both delegates would produce the same rows
    fn is_equal(&self, other: &Self) -> bool;
}

fn index_paths<D: ListDelegate + ?Sized>(delegate: &D) -> impl Iterator<Item = IndexPath> + '_ {
    (0..delegate.number_of_sections())
        .flat_map(move |section| (0..delegate.number_of_rows(section)).map(move |row| IndexPath::new(section, row)))
}

/// Frames of every row stacked top to bottom, sections in order
pub fn row_frames<D: ListDelegate + ?Sized>(delegate: &D, multiplier: f32, width: f32) -> Vec<(IndexPath, Rect)> {
    let mut y = 0.0;
    index_paths(delegate)
        .map(|index| {
            let height = delegate.row_height(index).scale(multiplier).max(0.0);
            let frame = Rect::new(0.0, y, width.max(0.0), height);
            y += height;
            (index, frame)
        })
        .collect()
}

pub fn content_height<D: ListDelegate + ?Sized>(delegate: &D, multiplier: f32) -> f32 {
    index_paths(delegate)
        .map(|index| delegate.row_height(index).scale(multiplier).max(0.0))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Row {
        Post(String),
        FetchMore,
    }

    struct Feed {
        posts: Vec<String>,
    }

    impl ListDelegate for Feed {
        type Item = Row;

        fn number_of_sections(&self) -> usize {
            2
        }

        fn number_of_rows(&self, section: usize) -> usize {
            if section == 0 {
                self.posts.len()
            } else {
                1
            }
        }

        fn item(&self, index: IndexPath) -> Row {
            if index.section == 0 {
                Row::Post(self.posts[index.row].clone())
            } else {
                Row::FetchMore
            }
        }

        fn row_height(&self, index: IndexPath) -> Value {
            if index.section == 0 {
                Value::scalable(50.0)
            } else {
                Value::fixed(10.0)
            }
        }

        fn is_equal(&self, other: &Self) -> bool {
            self.posts == other.posts
        }
    }

    fn sample_feed() -> Feed {
        Feed {
            posts: vec!["first".to_string(), "second".to_string()],
        }
    }

    #[test]
    fn test_rows_are_stacked() {
        let frames = row_frames(&sample_feed(), 2.0, 320.0);

        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0], (IndexPath::new(0, 0), Rect::new(0.0, 0.0, 320.0, 100.0)));
        assert_eq!(frames[1], (IndexPath::new(0, 1), Rect::new(0.0, 100.0, 320.0, 100.0)));
        assert_eq!(frames[2], (IndexPath::new(1, 0), Rect::new(0.0, 200.0, 320.0, 10.0)));
        assert_eq!(content_height(&sample_feed(), 2.0), 210.0);
    }

    #[test]
    fn test_items_and_equality() {
        let feed = sample_feed();
        assert_eq!(feed.item(IndexPath::new(0, 1)), Row::Post("second".to_string()));
        assert_eq!(feed.item(IndexPath::new(1, 0)), Row::FetchMore);

        let other = Feed { posts: vec!["first".to_string()] };
        assert!(feed.is_equal(&sample_feed()));
        assert!(!feed.is_equal(&other));
    }
}
