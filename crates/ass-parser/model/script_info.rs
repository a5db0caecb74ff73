//! `[Script Info]` metadata

use crate::values::{WrapStyle, YCbCrMatrix};

/// Metadata from the `[Script Info]` section
///
/// Fields documented as optional by the format are `Option` and are only
/// written when present. The rest are always written, using their default
/// when the source file omitted them.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScriptInfo {
    /// `;` and `!:` comment lines, in file order, without the marker
    pub comments: Vec<String>,

    /// Description of the script
    pub title: String,

    /// Original author(s) of the script
    pub original_script: String,

    /// Original translator of the dialogue
    pub original_translation: Option<String>,

    /// Original script editor(s)
    pub original_editing: Option<String>,

    /// Whoever timed the original script
    pub original_timing: Option<String>,

    /// Where in the video the script should begin playback
    pub synch_point: Option<String>,

    /// Other groups who edited the original script
    pub script_updated_by: Option<String>,

    /// Details of updates made by other groups
    pub update_details: Option<String>,

    /// Format version, `v4.00` for SSA and `v4.00+` for ASS
    pub script_type: String,

    /// `Normal` or `Reverse` collision stacking
    pub collisions: String,

    pub play_res_x: i32,
    pub play_res_y: i32,
    pub play_depth: i32,

    /// Timer speed as a percentage
    pub timer: f32,

    pub wrap_style: WrapStyle,

    /// Scale border and shadow with the script resolution instead of the video
    pub scaled_border_and_shadow: bool,

    pub ycbcr_matrix: YCbCrMatrix,
}
