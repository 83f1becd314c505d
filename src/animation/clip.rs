/// A named, timed animation clip as delivered by the asset loader.
///
/// Track data and sampling stay with the host's animation system; the
/// playback controller only needs the name and duration to run its clock.
#[derive(Debug, Clone, PartialEq)]
pub struct Clip {
    pub name: String,
    /// Length in seconds.
    pub duration: f32,
}

impl Clip {
    #[must_use]
    pub fn new(name: impl Into<String>, duration: f32) -> Self {
        Self {
            name: name.into(),
            duration,
        }
    }
}
