/// Options controlling module explosion.
#[derive(Debug, Clone)]
pub struct ExplodeOptions {
    /// Copy leading, trailing and inner comments onto output statements.
    pub attach_comments: bool,
}

impl Default for ExplodeOptions {
    fn default() -> Self {
        Self {
            attach_comments: true,
        }
    }
}
