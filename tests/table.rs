use hashtable::hash;
use hashtable::HashTable;
use hashtable::Value;

#[test]
fn reference_scenario() {
    let mut table = HashTable::new();
    table.add("name", Value::from("John"));
    table.add("age", Value::Int(30));
    table.add("city", Value::from("New York"));

    assert_eq!(table.lookup("name"), Some(&Value::from("John")));
    assert_eq!(table.lookup("age"), Some(&Value::Int(30)));
    assert_eq!(table.lookup("city"), Some(&Value::from("New York")));
    assert_eq!(table.lookup("email"), None);

    table.remove("age");
    assert_eq!(table.lookup("age"), None);
    assert_eq!(table.len(), 2);
}

#[test]
fn lookup_on_empty_table() {
    let table: HashTable<Value, Value> = HashTable::new();
    assert_eq!(table.lookup(&Value::from("email")), None);
    assert_eq!(table.lookup(&Value::Int(0)), None);
}

#[test]
fn hash_is_deterministic() {
    let keys = [
        Value::from("name"),
        Value::Int(30),
        Value::from(""),
        Value::from("New York"),
    ];
    for key in &keys {
        assert_eq!(hash(key), hash(key));
    }
    assert_eq!(hash(&Value::from("")), 0);
}

#[test]
fn overwrite_keeps_one_entry() {
    let mut table = HashTable::new();
    table.add(Value::from("k"), "v1");
    table.add(Value::from("k"), "v2");
    assert_eq!(table.lookup(&Value::from("k")), Some(&"v2"));
    assert_eq!(table.len(), 1);
}

#[test]
fn integer_and_text_keys_collide_without_mixing() {
    let int_key = Value::Int(30);
    let same_text = Value::from("30");
    let permuted = Value::from("03");
    assert_eq!(hash(&int_key), hash(&same_text));
    assert_eq!(hash(&int_key), hash(&permuted));

    let mut table = HashTable::new();
    table.add(int_key.clone(), "int");
    table.add(same_text.clone(), "text");
    table.add(permuted.clone(), "permuted");
    assert_eq!(table.bucket_count(), 1);
    assert_eq!(table.lookup(&int_key), Some(&"int"));
    assert_eq!(table.lookup(&same_text), Some(&"text"));
    assert_eq!(table.lookup(&permuted), Some(&"permuted"));

    table.remove(&same_text);
    assert_eq!(table.lookup(&int_key), Some(&"int"));
    assert_eq!(table.lookup(&same_text), None);
    assert_eq!(table.lookup(&permuted), Some(&"permuted"));
}

#[test]
fn remove_twice_matches_remove_once() {
    let mut once: HashTable<String, i32> = HashTable::new();
    let mut twice: HashTable<String, i32> = HashTable::new();
    for table in [&mut once, &mut twice] {
        table.add("a".to_owned(), 1);
        table.add("b".to_owned(), 2);
    }
    once.remove("a");
    twice.remove("a");
    twice.remove("a");
    for key in ["a", "b"] {
        assert_eq!(once.lookup(key), twice.lookup(key));
    }
    assert_eq!(once.len(), twice.len());
    assert_eq!(once.bucket_count(), twice.bucket_count());
}

#[test]
fn readd_after_remove() {
    let mut table = HashTable::new();
    table.add("key".to_owned(), 1);
    table.remove("key");
    assert!(!table.contains_key("key"));
    table.add("key".to_owned(), 2);
    assert_eq!(table.lookup("key"), Some(&2));
}

#[test]
fn many_keys_in_few_buckets() {
    let mut table = HashTable::new();
    // every permutation of "abcd" lands in the same bucket
    let letters = ['a', 'b', 'c', 'd'];
    let mut keys = Vec::new();
    for &w in &letters {
        for &x in &letters {
            for &y in &letters {
                for &z in &letters {
                    if w != x && w != y && w != z && x != y && x != z && y != z {
                        keys.push([w, x, y, z].iter().collect::<String>());
                    }
                }
            }
        }
    }
    assert_eq!(keys.len(), 24);
    for (i, key) in keys.iter().enumerate() {
        table.add(key.clone(), i);
    }
    assert_eq!(table.bucket_count(), 1);
    assert_eq!(table.len(), 24);
    for (i, key) in keys.iter().enumerate() {
        assert_eq!(table.lookup(key.as_str()), Some(&i));
    }
}
