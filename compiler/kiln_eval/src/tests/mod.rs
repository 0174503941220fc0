//! Test modules for the evaluator's leaf components.
