//! Command dispatcher
//!
//! Consumes a whitespace-tokenized instruction stream and executes each
//! instruction against an [`ImageStore`]. A failed instruction is reported
//! to the output sink and the stream continues with the next token; only a
//! failure of the sink itself aborts the run.
//!
//! Instruction shapes (tokens after the keyword):
//!
//! | keyword | arguments |
//! |---|---|
//! | `brighten` | delta, source id, dest id |
//! | `color-channel` | red\|green\|blue, source id, dest id |
//! | `value-component` | source id, dest id |
//! | `intensity-component` | source id, dest id |
//! | `luma-component` | source id, dest id |
//! | `blur` | source id, dest id |
//! | `sharpen` | source id, dest id |
//! | `load` | file path, dest id |
//! | `save` | file path, source id |

use crate::error::{ScriptError, ScriptResult};
use crate::store::ImageStore;
use rasterlab_core::Channel;
use rasterlab_filter::Transformation;
use std::io::{self, Write};

/// Executes script instructions against an image store.
///
/// The store is borrowed rather than owned so that a session (or a test)
/// can inspect it between runs; diagnostics go to the supplied sink.
pub struct Dispatcher<'a, W: Write> {
    store: &'a mut ImageStore,
    output: W,
}

impl<'a, W: Write> Dispatcher<'a, W> {
    /// Create a dispatcher over `store`, reporting to `output`.
    pub fn new(store: &'a mut ImageStore, output: W) -> Self {
        Dispatcher { store, output }
    }

    /// Run every instruction in `input` to exhaustion.
    ///
    /// Unrecognized keywords and per-instruction failures are reported and
    /// skipped; they never abort the stream.
    ///
    /// # Errors
    ///
    /// Only fails if writing a diagnostic to the sink fails.
    pub fn run(&mut self, input: &str) -> io::Result<()> {
        let mut tokens = input.split_whitespace();
        while let Some(keyword) = tokens.next() {
            match self.execute(keyword, &mut tokens) {
                None => writeln!(self.output, "Invalid command.")?,
                Some(Err(e)) => writeln!(self.output, "{e}")?,
                Some(Ok(())) => {}
            }
        }
        Ok(())
    }

    /// Execute one instruction; `None` means the keyword is unrecognized
    /// (and its argument tokens are left for the next iteration).
    fn execute<'t>(
        &mut self,
        keyword: &str,
        tokens: &mut impl Iterator<Item = &'t str>,
    ) -> Option<ScriptResult<()>> {
        let result = match keyword {
            "load" => self.load(tokens),
            "save" => self.save(tokens),
            "brighten" => self.brighten(tokens),
            "color-channel" => self.color_channel(tokens),
            "value-component" => self.transform(tokens, Transformation::GreyscaleValue),
            "intensity-component" => self.transform(tokens, Transformation::GreyscaleIntensity),
            "luma-component" => self.transform(tokens, Transformation::GreyscaleLuma),
            "blur" => self.transform(tokens, Transformation::Blur),
            "sharpen" => self.transform(tokens, Transformation::Sharpen),
            _ => return None,
        };
        Some(result)
    }

    /// `brighten <delta> <source> <dest>`. The full arity is consumed
    /// before validation so a bad delta never leaves its ids behind to be
    /// misread as commands.
    fn brighten<'t>(&mut self, tokens: &mut impl Iterator<Item = &'t str>) -> ScriptResult<()> {
        let raw = next_token(tokens, "brighten delta")?;
        let source_id = next_token(tokens, "source image id")?;
        let dest_id = next_token(tokens, "destination image id")?;
        let delta: i32 = raw.parse().map_err(|_| {
            ScriptError::Parse(format!("brighten delta must be an integer, got {raw:?}"))
        })?;
        self.apply_stored(source_id, dest_id, Transformation::Brighten(delta))
    }

    /// `color-channel <red|green|blue> <source> <dest>`.
    fn color_channel<'t>(
        &mut self,
        tokens: &mut impl Iterator<Item = &'t str>,
    ) -> ScriptResult<()> {
        let raw = next_token(tokens, "channel name")?;
        let source_id = next_token(tokens, "source image id")?;
        let dest_id = next_token(tokens, "destination image id")?;
        let channel: Channel = raw.parse()?;
        self.apply_stored(source_id, dest_id, Transformation::GreyscaleChannel(channel))
    }

    /// Shared shape of the parameterless transformation instructions:
    /// source id, dest id, fetch, apply, store.
    fn transform<'t>(
        &mut self,
        tokens: &mut impl Iterator<Item = &'t str>,
        transformation: Transformation,
    ) -> ScriptResult<()> {
        let source_id = next_token(tokens, "source image id")?;
        let dest_id = next_token(tokens, "destination image id")?;
        self.apply_stored(source_id, dest_id, transformation)
    }

    fn apply_stored(
        &mut self,
        source_id: &str,
        dest_id: &str,
        transformation: Transformation,
    ) -> ScriptResult<()> {
        let source = self
            .store
            .get(source_id)
            .ok_or_else(|| ScriptError::NotFound(source_id.to_string()))?;
        let result = transformation.apply(source);
        self.store.add(dest_id, result)
    }

    fn load<'t>(&mut self, tokens: &mut impl Iterator<Item = &'t str>) -> ScriptResult<()> {
        let path = next_token(tokens, "file path")?;
        let dest_id = next_token(tokens, "destination image id")?;
        let image = rasterlab_io::read_image(path)?;
        self.store.add(dest_id, image)
    }

    fn save<'t>(&mut self, tokens: &mut impl Iterator<Item = &'t str>) -> ScriptResult<()> {
        let path = next_token(tokens, "file path")?;
        let source_id = next_token(tokens, "source image id")?;
        let image = self
            .store
            .get(source_id)
            .ok_or_else(|| ScriptError::NotFound(source_id.to_string()))?;
        rasterlab_io::write_image(image, path)?;
        Ok(())
    }
}

fn next_token<'t>(
    tokens: &mut impl Iterator<Item = &'t str>,
    what: &str,
) -> ScriptResult<&'t str> {
    tokens
        .next()
        .ok_or_else(|| ScriptError::Parse(format!("missing {what}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterlab_core::{Image, ImageMut};

    fn store_with_pixel(id: &str, r: i32, g: i32, b: i32) -> ImageStore {
        let mut image = ImageMut::new(1, 1);
        image.set_pixel(0, 0, r, g, b).unwrap();
        let mut store = ImageStore::new();
        store.add(id, image.into()).unwrap();
        store
    }

    fn run(store: &mut ImageStore, input: &str) -> String {
        let mut sink = Vec::new();
        Dispatcher::new(store, &mut sink).run(input).unwrap();
        String::from_utf8(sink).unwrap()
    }

    fn rgb(image: &Image) -> (u8, u8, u8) {
        let p = image.get_pixel(0, 0).unwrap();
        (p.red(), p.green(), p.blue())
    }

    #[test]
    fn test_brighten_stores_under_dest() {
        let mut store = store_with_pixel("src", 100, 100, 100);
        let output = run(&mut store, "brighten 10 src dest");
        assert!(output.is_empty(), "unexpected diagnostics: {output}");
        assert_eq!(rgb(store.get("dest").unwrap()), (110, 110, 110));
        // source untouched
        assert_eq!(rgb(store.get("src").unwrap()), (100, 100, 100));
    }

    #[test]
    fn test_unknown_command_reports_and_continues() {
        let mut store = store_with_pixel("src", 50, 50, 50);
        let output = run(&mut store, "rotate brighten 5 src dest");
        assert!(output.contains("Invalid command."));
        // the stream continued: the brighten after the bad token ran
        assert_eq!(rgb(store.get("dest").unwrap()), (55, 55, 55));
    }

    #[test]
    fn test_unknown_command_leaves_store_unchanged() {
        let mut store = store_with_pixel("src", 50, 50, 50);
        let output = run(&mut store, "rotate");
        assert!(output.contains("Invalid command."));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_missing_tokens_reported() {
        let mut store = store_with_pixel("src", 50, 50, 50);
        let output = run(&mut store, "brighten 5 src");
        assert!(output.contains("missing destination image id"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_non_integer_delta_reported() {
        let mut store = store_with_pixel("src", 50, 50, 50);
        let output = run(&mut store, "brighten lots src dest");
        assert!(output.contains("must be an integer"));
        assert!(store.get("dest").is_none());
    }

    #[test]
    fn test_missing_source_reported_then_resumes() {
        let mut store = store_with_pixel("src", 60, 60, 60);
        let output = run(&mut store, "blur ghost dest brighten -10 src dim");
        assert!(output.contains("\"ghost\" doesn't exist"));
        assert!(store.get("dest").is_none());
        assert_eq!(rgb(store.get("dim").unwrap()), (50, 50, 50));
    }

    #[test]
    fn test_invalid_channel_reported() {
        let mut store = store_with_pixel("src", 10, 20, 30);
        let output = run(&mut store, "color-channel cyan src dest");
        assert!(output.contains("invalid channel"));
        assert!(store.get("dest").is_none());
    }

    #[test]
    fn test_color_channel() {
        let mut store = store_with_pixel("src", 10, 20, 30);
        run(&mut store, "color-channel green src dest");
        assert_eq!(rgb(store.get("dest").unwrap()), (20, 20, 20));
    }

    #[test]
    fn test_greyscale_components() {
        let mut store = store_with_pixel("src", 30, 90, 160);
        run(
            &mut store,
            "value-component src v intensity-component src i luma-component src l",
        );
        assert_eq!(rgb(store.get("v").unwrap()), (160, 160, 160));
        // (30 + 90 + 160) / 3 = 93
        assert_eq!(rgb(store.get("i").unwrap()), (93, 93, 93));
        // 0.2126*30 + 0.7152*90 + 0.0722*160 = 82.3 -> 82
        assert_eq!(rgb(store.get("l").unwrap()), (82, 82, 82));
    }

    #[test]
    fn test_dest_overwrites() {
        let mut store = store_with_pixel("src", 100, 100, 100);
        run(&mut store, "brighten 10 src out brighten 20 src out");
        assert_eq!(rgb(store.get("out").unwrap()), (120, 120, 120));
    }

    #[test]
    fn test_load_failure_skips_store_mutation() {
        let mut store = ImageStore::new();
        let output = run(&mut store, "load missing_file.ppm dest");
        assert!(!output.is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_missing_id() {
        let mut store = ImageStore::new();
        let output = run(&mut store, "save out.ppm ghost");
        assert!(output.contains("doesn't exist"));
    }
}
