//! Form controls and small display components shared by every page.

mod avatar;
mod button;
mod card;
mod input;
mod spinner;

pub use avatar::Avatar;
pub use button::{Button, ButtonVariant};
pub use card::{Card, CardDescription, CardFooter, CardHeader, CardTitle};
pub use input::{FieldError, Input, Label};
pub use spinner::Spinner;
