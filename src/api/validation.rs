use crate::error::{CrosshairError, CrosshairResult};

use super::{CrosshairConfig, DotStyle, MarkerStroke};

pub(super) fn validate_crosshair_config(config: CrosshairConfig) -> CrosshairResult<CrosshairConfig> {
    config
        .color
        .validate()
        .map_err(|err| CrosshairError::InvalidConfig(format!("crosshair color: {err}")))?;
    if !config.line_width.is_finite() || config.line_width <= 0.0 {
        return Err(CrosshairError::InvalidConfig(
            "crosshair line_width must be finite and > 0".to_owned(),
        ));
    }
    validate_dot_style(config.dot_style)?;
    Ok(config)
}

fn validate_dot_style(style: DotStyle) -> CrosshairResult<DotStyle> {
    if !style.radius.is_finite() || style.radius <= 0.0 {
        return Err(CrosshairError::InvalidConfig(
            "dot_style radius must be finite and > 0".to_owned(),
        ));
    }
    if !style.line_width.is_finite() || style.line_width < 0.0 {
        return Err(CrosshairError::InvalidConfig(
            "dot_style line_width must be finite and >= 0".to_owned(),
        ));
    }
    if let MarkerStroke::Fixed(color) = style.stroke {
        color
            .validate()
            .map_err(|err| CrosshairError::InvalidConfig(format!("dot_style stroke: {err}")))?;
    }
    if let Some(fill) = style.fill_color {
        fill.validate()
            .map_err(|err| CrosshairError::InvalidConfig(format!("dot_style fill: {err}")))?;
    }
    Ok(style)
}
