/// Widgets of the main window
///
/// - `card` renders one artwork item
/// - `add_card` renders the "Add Artwork!" form
/// - `toast` renders the notification overlay

pub mod add_card;
pub mod card;
pub mod toast;
