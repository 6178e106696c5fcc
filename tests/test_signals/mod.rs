pub mod generate;

pub use generate::{generate_pcm_sine, reference_sine};
