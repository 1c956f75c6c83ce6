mod insert;
mod query;
