/// Marker event announced after a successful login.
///
/// Carries no payload; subscribers that need the token read it from the
/// token store instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoggedInEvent;
