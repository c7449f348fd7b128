mod hasher;
pub use hasher::hash;
pub use hasher::BucketId;

mod bucket;

mod table;
pub use table::HashTable;

mod value;
pub use value::Value;

mod error;
pub use error::HashTableError;
pub use error::Result;

mod script;
pub use script::Command;
pub use script::Interpreter;
