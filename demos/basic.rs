//! Examples of using the sequence map
use seqmap::SequenceMap;

fn main() {
    // Create a new map with string elements
    let mut map = SequenceMap::<&str, i32>::new();

    // Insert some values
    map.insert(vec!["a", "b"], 4);
    map.insert(vec!["a", "b", "c"], 2);
    map.insert(vec!["a", "b", "d"], 3);
    map.insert(Vec::new(), 1);

    // Check values
    assert_eq!(map.get(&["a", "b"]), Some(&4));
    assert_eq!(map.get(&["a", "b", "c"]), Some(&2));
    assert_eq!(map.get::<&str>(&[]), Some(&1));
    assert_eq!(map.get(&["missing"]), None);

    // Overwriting hands back the old value
    assert_eq!(map.insert(vec!["a", "b"], 40), Some(4));
    assert_eq!(map.len(), 4);

    // Visit everything, stopping once a large value turns up
    let finished = map.for_each(|key, value| {
        println!("{:?} → {}", key, value);
        *value < 10
    });
    println!("visited every entry: {}", finished);

    // Deleting a prefix leaves longer keys alone
    assert!(map.delete(&["a", "b"]));
    assert_eq!(map.get(&["a", "b", "d"]), Some(&3));
    assert_eq!(map.len(), 3);
}
