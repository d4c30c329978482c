use super::cursor::Cursor;
use super::linked_queue::Queue;
use crate::error::{QueueError, Result};

pub fn filter<T, P>(queue: &Queue<T>, mut predicate: P) -> Result<Queue<T>>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let mut filtered = Queue::new();
    let end = queue.end();
    let mut cursor = queue.begin();
    while cursor != end {
        let elem = cursor.into_ref()?;
        if predicate(elem) {
            filtered.push_back(elem.clone())?;
        }
        cursor.advance()?;
    }
    Ok(filtered)
}

pub fn transform<T, F>(queue: &mut Queue<T>, mut mapper: F) -> Result<()>
where
    T: Clone,
    F: FnMut(&mut T),
{
    try_transform(queue, |elem| {
        mapper(elem);
        Ok::<(), QueueError>(())
    })
}

// maps a copy and swaps it in only after every element succeeded
pub fn try_transform<T, F, E>(queue: &mut Queue<T>, mut mapper: F) -> std::result::Result<(), E>
where
    T: Clone,
    F: FnMut(&mut T) -> std::result::Result<(), E>,
    E: From<QueueError>,
{
    let mut transformed = queue.try_clone()?;
    let mut cursor = transformed.begin_mut();
    while !cursor.is_end() {
        mapper(cursor.get_mut()?)?;
        cursor.advance()?;
    }
    std::mem::swap(queue, &mut transformed);
    Ok(())
}

pub fn distance<'a, T: 'a>(from: impl Into<Cursor<'a, T>>) -> Result<usize> {
    let mut cursor = from.into();
    let mut steps = 0;
    while !cursor.is_end() {
        cursor.advance()?;
        steps += 1;
    }
    Ok(steps)
}

#[cfg(test)]
mod test {
    use super::{distance, filter, transform, try_transform};
    use crate::error::QueueError;
    use crate::queue::Queue;

    use std::panic::{catch_unwind, AssertUnwindSafe};

    use proptest::prelude::*;

    fn to_vec<T: Clone>(queue: &Queue<T>) -> Vec<T> {
        queue.iter().cloned().collect()
    }

    #[test]
    fn test_filter() {
        let queue: Queue<i32> = (1..=5).collect();
        let even = filter(&queue, |x| x % 2 == 0).unwrap();
        assert_eq!(to_vec(&even), [2, 4]);
        assert_eq!(to_vec(&queue), [1, 2, 3, 4, 5]);

        let none = filter(&queue, |_| false).unwrap();
        assert!(none.is_empty());
        assert_eq!(none.begin(), none.end());

        let empty = filter(&Queue::<i32>::new(), |_| true).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_transform() {
        let mut queue: Queue<i32> = (1..=3).collect();
        transform(&mut queue, |x| *x *= 10).unwrap();
        assert_eq!(to_vec(&queue), [10, 20, 30]);

        let mut words: Queue<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        transform(&mut words, |s| s.push('!')).unwrap();
        assert_eq!(to_vec(&words), ["a!", "b!"]);
    }

    #[derive(Debug, PartialEq)]
    enum MapError {
        Queue(QueueError),
        TooBig(i32),
    }

    impl From<QueueError> for MapError {
        fn from(err: QueueError) -> Self {
            MapError::Queue(err)
        }
    }

    #[test]
    fn test_try_transform_is_all_or_nothing() {
        let mut queue: Queue<i32> = (1..=5).collect();

        let result = try_transform(&mut queue, |x| {
            if *x > 3 {
                return Err(MapError::TooBig(*x));
            }
            *x *= 100;
            Ok(())
        });
        assert_eq!(result, Err(MapError::TooBig(4)));
        assert_eq!(to_vec(&queue), [1, 2, 3, 4, 5]);

        try_transform(&mut queue, |x| {
            *x += 1;
            Ok::<(), MapError>(())
        })
        .unwrap();
        assert_eq!(to_vec(&queue), [2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_transform_panic_leaves_queue() {
        let mut queue: Queue<i32> = (1..=3).collect();
        let result = catch_unwind(AssertUnwindSafe(|| {
            transform(&mut queue, |x| {
                if *x == 2 {
                    panic!("mapper failed");
                }
                *x = 0;
            })
        }));
        assert!(result.is_err());
        assert_eq!(to_vec(&queue), [1, 2, 3]);
    }

    #[test]
    fn test_distance() {
        let mut queue: Queue<u8> = (0..4).collect();
        assert_eq!(distance(queue.begin()), Ok(4));
        assert_eq!(distance(queue.end()), Ok(0));

        let mut cursor = queue.begin_mut();
        cursor.advance().unwrap();
        assert_eq!(distance(cursor), Ok(3));
    }

    proptest! {
        #[test]
        fn check_filter(values: Vec<i64>, modulus in 1i64..8) {
            let queue: Queue<_> = values.iter().copied().collect();
            let kept = filter(&queue, |x| x % modulus == 0).unwrap();
            let expected: Vec<_> = values.iter().copied().filter(|x| x % modulus == 0).collect();
            prop_assert_eq!(to_vec(&kept), expected);
            prop_assert_eq!(to_vec(&queue), values);
        }
    }
}
