mod card;
mod layout;
mod link;
mod tab_bar;
mod util;

pub use self::card::*;
pub use self::layout::*;
pub use self::link::*;
pub use self::tab_bar::*;
pub use self::util::*;
