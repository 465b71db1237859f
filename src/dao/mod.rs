/// Text generation backends.
pub mod text_generator;
