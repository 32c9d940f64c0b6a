mod concurrency;
mod properties;
mod scenarios;
