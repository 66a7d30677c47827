/// Generator configuration, fixed for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Appended to each file's generated filename prefix.
    pub generated_filename_suffix: String,
    /// Name of the getter-based copy method; empty disables it.
    pub shallow_copy_method: String,
    /// Name of the clone method; empty disables it.
    pub shallow_clone_method: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            generated_filename_suffix: "_copy.pb.go".to_string(),
            shallow_copy_method: "Proto_ShallowCopy".to_string(),
            shallow_clone_method: "Proto_ShallowClone".to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn copy_enabled(&self) -> bool {
        !self.shallow_copy_method.is_empty()
    }

    pub fn clone_enabled(&self) -> bool {
        !self.shallow_clone_method.is_empty()
    }
}
