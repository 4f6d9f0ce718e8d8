//! Named entity capability shared by folders, files and labels.

use crate::name;

pub trait NamedEntity {
    /// Display name with its true capitalization.
    fn name(&self) -> &str;

    /// Replace the display name. Validation is the caller's job.
    fn set_name(&mut self, name: String);

    fn name_equals(&self, other: &str) -> bool {
        name::names_equal(self.name(), other)
    }

    fn name_starts_with(&self, prefix: &str) -> bool {
        name::name_starts_with(self.name(), prefix)
    }

    /// Rename and return the previous name.
    fn rename(&mut self, new_name: &str) -> String {
        let old = self.name().to_string();
        self.set_name(new_name.to_string());
        old
    }
}
