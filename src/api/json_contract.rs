use serde::{Deserialize, Serialize};

use crate::error::{CrosshairError, CrosshairResult};

use super::CrosshairConfig;

pub const CROSSHAIR_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrosshairConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: CrosshairConfig,
}

impl CrosshairConfig {
    pub fn to_json_pretty(self) -> CrosshairResult<String> {
        serde_json::to_string_pretty(&self).map_err(|e| {
            CrosshairError::InvalidData(format!("failed to serialize crosshair config json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(self) -> CrosshairResult<String> {
        let payload = CrosshairConfigJsonContractV1 {
            schema_version: CROSSHAIR_CONFIG_JSON_SCHEMA_V1,
            config: self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            CrosshairError::InvalidData(format!(
                "failed to serialize crosshair config contract v1: {e}"
            ))
        })
    }

    /// Parses either a bare config object or a versioned v1 payload, then
    /// validates the result.
    pub fn from_json_compat_str(input: &str) -> CrosshairResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            CrosshairError::InvalidData(format!("failed to parse crosshair config json: {e}"))
        })?;

        let config = if value.get("schema_version").is_some() {
            let payload: CrosshairConfigJsonContractV1 =
                serde_json::from_value(value).map_err(|e| {
                    CrosshairError::InvalidData(format!(
                        "failed to parse crosshair config payload: {e}"
                    ))
                })?;
            if payload.schema_version != CROSSHAIR_CONFIG_JSON_SCHEMA_V1 {
                return Err(CrosshairError::InvalidData(format!(
                    "unsupported crosshair config schema version: {}",
                    payload.schema_version
                )));
            }
            payload.config
        } else {
            serde_json::from_value::<CrosshairConfig>(value).map_err(|e| {
                CrosshairError::InvalidData(format!("failed to parse crosshair config: {e}"))
            })?
        };

        config.validate()
    }
}
