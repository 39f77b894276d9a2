/// Longest slug accepted before it is treated as unresolvable
pub const MAX_SLUG_LENGTH: usize = 100;

/// Query value of `city` that explicitly clears the city selection
pub const NO_CITY: &str = "";

// =============================================================================
// INLINE NOTICES
// =============================================================================

/// Shown in place of the resort list when the catalog store cannot be reached
pub const RESORTS_UNAVAILABLE_MESSAGE: &str =
    "Resort data is temporarily unavailable. Please try again later.";

/// Shown when the city selector could not be populated
pub const CITIES_UNAVAILABLE_MESSAGE: &str = "The list of cities is temporarily unavailable.";
