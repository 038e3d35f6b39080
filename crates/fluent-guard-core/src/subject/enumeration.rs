/// An open enum: a value that may hold discriminants the enum does not
/// define, such as a raw value read from the wire.
///
/// Declare one with [`defined_enum!`](crate::defined_enum).
pub trait Enumeration: Copy {
    /// Name of the enum as it appears in failure messages.
    const ENUM_NAME: &'static str;

    /// Returns true if the value is one the enum defines.
    fn is_defined(&self) -> bool;
}
