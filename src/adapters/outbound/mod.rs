pub mod dynamodb;
pub mod persistence;
