mod database;

pub use database::MongoDb;
