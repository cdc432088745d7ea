//! Callback-style entry points.
//!
//! A [`Transformer`] is created once with its configuration and a completion
//! callback. Each successful `transform_*` call hands the result to the
//! callback exactly once; a failed call returns the error and never calls it.

use std::path::Path;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::config::Config;
use crate::errors::WaggleError;
use crate::log::debug;
use crate::rewrite::rewrite_document;

/// Label used in diagnostics for in-memory input.
pub const INPUT_NAME: &str = "<input>";

/// Transforms documents and reports each result through `on_complete`.
pub struct Transformer<F: FnMut(String)> {
    config: Config,
    on_complete: F,
}

/// Create a transformer. With `waggly` off it echoes its input unchanged.
pub fn create<F: FnMut(String)>(config: Config, on_complete: F) -> Transformer<F> {
    Transformer {
        config,
        on_complete,
    }
}

impl<F: FnMut(String)> Transformer<F> {
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Transform markup held in memory.
    pub fn transform_text(&mut self, markup: &str) -> Result<(), WaggleError> {
        let result = self.run(INPUT_NAME, markup)?;
        (self.on_complete)(result);
        Ok(())
    }

    /// Read `path` and transform its contents.
    pub fn transform_source(&mut self, path: impl AsRef<Path>) -> Result<(), WaggleError> {
        let path = path.as_ref();
        let markup = std::fs::read_to_string(path).map_err(|source| WaggleError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let result = self.run(&path.display().to_string(), &markup)?;
        (self.on_complete)(result);
        Ok(())
    }

    fn run(&self, name: &str, markup: &str) -> Result<String, WaggleError> {
        if !self.config.is_waggly() {
            debug!(name, "waggly disabled, passing through");
            return Ok(markup.to_string());
        }
        let mut rng = random_source(&self.config);
        rewrite_document(name, markup, &self.config, rng.as_mut())
    }
}

/// Seeded when the config asks for it, thread-local entropy otherwise.
pub fn random_source(config: &Config) -> Box<dyn RngCore> {
    match config.seed() {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_mode_is_identity() {
        let input = r#"<ns0:polyline fill="none" points="0.5,-60.5 83.5,-60.5" stroke="black"/>"#;
        let mut results = Vec::new();
        let mut transformer = create(Config::new(), |out| results.push(out));
        transformer.transform_text(input).unwrap();
        drop(transformer);
        assert_eq!(results, vec![input.to_string()]);
    }

    #[test]
    fn disabled_mode_does_not_even_parse() {
        let input = "<not <xml";
        let mut calls = 0;
        let mut transformer = create(Config::new(), |out| {
            assert_eq!(out, input);
            calls += 1;
        });
        transformer.transform_text(input).unwrap();
        drop(transformer);
        assert_eq!(calls, 1);
    }

    #[test]
    fn callback_fires_once_per_call() {
        let mut calls = 0;
        let mut transformer = create(Config::waggly(), |_| calls += 1);
        transformer.transform_text("<svg/>").unwrap();
        transformer.transform_text("<svg/>").unwrap();
        drop(transformer);
        assert_eq!(calls, 2);
    }

    #[test]
    fn errors_skip_the_callback() {
        let mut calls = 0;
        let mut transformer = create(Config::waggly(), |_| calls += 1);
        assert!(transformer.transform_text("<svg></g>").is_err());
        drop(transformer);
        assert_eq!(calls, 0);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let mut transformer = create(Config::new(), |_| panic!("must not complete"));
        let err = transformer
            .transform_source("does/not/exist.svg")
            .unwrap_err();
        assert!(matches!(err, WaggleError::Read { .. }));
    }

    #[test]
    fn seeded_runs_repeat() {
        let config = Config::waggly().with_seed(11);
        let input = r#"<polyline points="0,0 100,0"/>"#;
        let mut outputs = Vec::new();
        let mut transformer = create(config, |out| outputs.push(out));
        transformer.transform_text(input).unwrap();
        transformer.transform_text(input).unwrap();
        drop(transformer);
        assert_eq!(outputs[0], outputs[1]);
    }
}
