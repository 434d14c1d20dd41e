use std::{fs, path::Path};

use json::JsonValue;

use crate::{
    error::{GabialError, Result},
    transform::rotate::QuarterTurn,
};

/// Settings for one gabial run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Strips per permutation pass
    pub slice_amt: u32,
    /// Turn applied between the two passes (undone at the end)
    pub turn: QuarterTurn,
    /// Open the result in a viewer once written
    pub show: bool,
}

impl PipelineConfig {
    pub fn new(slice_amt: u32) -> Self {
        PipelineConfig {
            slice_amt,
            turn: QuarterTurn::default(),
            show: true,
        }
    }

    /// Apply the keys of a JSON config document on top of `self`.
    ///
    /// Recognised keys are `turn` (`"cw"` or `"ccw"`) and `show` (bool); missing
    /// keys keep their current value.
    pub fn merge_json(mut self, json_string: &str) -> Result<PipelineConfig> {
        let json = json::parse(json_string)?;

        if !json.is_object() {
            return config_error("config should be a JSON object");
        }

        if !json["turn"].is_null() {
            self.turn = match json["turn"].as_str().and_then(QuarterTurn::from_name) {
                Some(turn) => turn,
                None => return config_error("Not recognized turn, expected \"cw\" or \"ccw\""),
            };
        }

        if !json["show"].is_null() {
            self.show = match json["show"].as_bool() {
                Some(val) => val,
                None => return config_error("Couldn't parse show"),
            };
        }

        Ok(self)
    }

    pub fn read_config(self, path: &Path) -> Result<PipelineConfig> {
        let json_string = fs::read_to_string(path)?;
        self.merge_json(&json_string)
    }

    pub fn to_json(&self) -> String {
        let mut data = JsonValue::new_object();

        data["slice_amt"] = self.slice_amt.into();
        data["turn"] = self.turn.into();
        data["show"] = self.show.into();

        data.to_string()
    }
}

impl From<QuarterTurn> for JsonValue {
    fn from(turn: QuarterTurn) -> Self {
        JsonValue::String(String::from(turn.as_str()))
    }
}

fn config_error(msg: &str) -> Result<PipelineConfig> {
    Err(GabialError::Config(String::from(msg)))
}
