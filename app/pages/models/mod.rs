pub mod _model_index;
