use std::io::{self, Write};

use anyhow::Result;
use serde::Serialize;

use ffmpeg_utils::ComponentMap;

/**
    Renders command results either as aligned text or as JSON.
*/
#[derive(Clone, Copy, Debug)]
pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    pub fn json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    pub fn components(&self, title: &str, components: &ComponentMap) -> Result<()> {
        self.write_components(&mut io::stdout().lock(), title, components)
    }

    fn write_components(
        &self,
        out: &mut impl Write,
        title: &str,
        components: &ComponentMap,
    ) -> Result<()> {
        if self.json {
            writeln!(out, "{}", serde_json::to_string_pretty(components)?)?;
            return Ok(());
        }

        writeln!(out, "{title}:")?;
        let width = components.keys().map(String::len).max().unwrap_or(0);
        for (name, long_name) in components {
            if long_name.is_empty() {
                writeln!(out, "  {name}")?;
            } else {
                writeln!(out, "  {name:<width$}  {long_name}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ComponentMap {
        ComponentMap::from([
            ("file".to_string(), String::new()),
            ("wav".to_string(), "WAV / WAVE (Waveform Audio)".to_string()),
        ])
    }

    fn render(output: Output) -> String {
        let mut buf = Vec::new();
        output
            .write_components(&mut buf, "Demuxers", &sample())
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_aligns_long_names() {
        assert_eq!(
            render(Output::new(false)),
            "Demuxers:\n  file\n  wav   WAV / WAVE (Waveform Audio)\n"
        );
    }

    #[test]
    fn json_is_a_name_map() {
        let value: serde_json::Value = serde_json::from_str(&render(Output::new(true))).unwrap();
        assert_eq!(value["file"], "");
        assert_eq!(value["wav"], "WAV / WAVE (Waveform Audio)");
        assert_eq!(value.as_object().unwrap().len(), 2);
    }
}
