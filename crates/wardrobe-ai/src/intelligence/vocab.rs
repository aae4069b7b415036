//! Canonical tagging vocabulary for the rule catalog.
//!
//! Every token the trained tables refer to is named here exactly once, so the
//! catalog cannot drift into ad hoc spellings. Matching against free-form
//! garment labels is still substring based; the vocabulary only fixes the
//! spelling of the rule side.

// Colors
pub const WHITE: &str = "white";
pub const BLACK: &str = "black";
pub const NAVY: &str = "navy";
pub const BLUE: &str = "blue";
pub const LIGHT_BLUE: &str = "light-blue";
pub const LIGHT_GREEN: &str = "light-green";
pub const BOTTLE_GREEN: &str = "bottle-green";
pub const YELLOW: &str = "yellow";
pub const RED: &str = "red";
pub const MAROON: &str = "maroon";
pub const BLACKISH_WHITE: &str = "blackish-white";
pub const NEUTRAL: &str = "neutral";
pub const DARK_COLORS: &str = "dark-colors";
pub const BLACK_HEAVY: &str = "black-heavy";

// Patterns
pub const CHECKED: &str = "checked";
pub const STRIPED: &str = "striped";
pub const PRINTED: &str = "printed";
pub const CHECK_PATTERN: &str = "check-pattern";
pub const HALF_SLEEVE_CHECK: &str = "half-sleeve-check";

// Pattern classes used by the pattern-mix tier rules
pub const PATTERNED: &str = "patterned";
pub const SOLID: &str = "solid";

// Garment categories
pub const POLO: &str = "polo";
pub const SHIRT: &str = "shirt";
pub const T_SHIRT: &str = "t-shirt";
pub const HOODIE: &str = "hoodie";
pub const BLAZER: &str = "blazer";
pub const KURTA: &str = "kurta";
pub const PAJAMAS: &str = "pajamas";
pub const JEANS: &str = "jeans";
pub const BAGGY_JEANS: &str = "baggy-jeans";
pub const DRESS_PANTS: &str = "dress-pants";
pub const BLACK_TRACKPANT: &str = "black-trackpant";
pub const OUTERWEAR: &str = "outerwear";

// Footwear
pub const SANDAL: &str = "sandal";
pub const CANVAS: &str = "canvas";
pub const CHELSEA_BOOTS: &str = "chelsea-boots";
pub const BLUE_JORDAN: &str = "blue-jordan";
