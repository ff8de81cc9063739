use serde::{Deserialize, Serialize};

use crate::media::{Profile, ScaleFactor};

/// Parameters attached to one batch run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub scale: ScaleFactor,
    #[serde(default)]
    pub profile: Profile,
}
