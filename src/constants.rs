// Page wiring and presentation tuning for the web front-end.
// Element ids match the page markup; timings only sequence cosmetic effects.

// Scenery containers inside <a-scene>
pub const TERRAIN_ID: &str = "terrain";
pub const TREES_ID: &str = "trees";
pub const FLOWERS_ID: &str = "flowers";
pub const CLOUDS_ID: &str = "clouds";
pub const GRAVESTONES_3D_ID: &str = "gravestones-3d";

// 2D surface that holds DOM tombstones
pub const SURFACE_2D_ID: &str = "cemetery";

// Drag selection box
pub const DRAG_INDICATOR_ID: &str = "dragIndicator";

// Inscription modal and its fields
pub const MODAL_ID: &str = "inscriptionModal";
pub const FORM_ID: &str = "inscriptionForm";
pub const MODAL_CLOSE_ID: &str = "modalClose";
pub const NAME_INPUT_ID: &str = "nameInput";
pub const BIRTH_YEAR_ID: &str = "birthYear";
pub const DEATH_YEAR_ID: &str = "deathYear";
pub const EPITAPH_INPUT_ID: &str = "epitaphInput";
pub const FREE_TEXT_ID: &str = "inscriptionText";
pub const STRUCTURED_FIELDS_ID: &str = "structuredFields";
pub const FREE_TEXT_FIELDS_ID: &str = "freeTextFields";

// Hit-test selectors (ancestor lookup from the event target)
pub const MODAL_SELECTOR: &str = ".modal";
pub const GRAVESTONE_SELECTOR: &str = ".gravestone-3d, .tombstone";

// CSS classes toggled by effects
pub const ACTIVE_CLASS: &str = "active";
pub const PRESSING_CLASS: &str = "pressing";
pub const MARKED_CLASS: &str = "marked-for-deletion";
pub const RISING_CLASS: &str = "rising";

// Cosmetic timings (ms)
pub const STONE_RISE_MS: u32 = 800;
pub const STONE_RISE_DEPTH: f32 = 2.0; // world units a new stone rises from
pub const TAP_PULSE_MS: i32 = 600;
pub const PARTICLE_LIFETIME_MS: i32 = 1200;
pub const PARTICLE_COUNT: usize = 8;
pub const PARTICLE_RADIUS_PX: f32 = 60.0;

// Text on 3D stones
pub const TEXT_COLOR: &str = "#333333";
pub const WRAP_PLACEHOLDER: u32 = 10;
pub const WRAP_INSCRIBED: u32 = 15;

// Placement chime
pub const CHIME_HZ: f32 = 392.0; // G4
pub const CHIME_VELOCITY: f32 = 0.18;
pub const CHIME_DURATION_SEC: f64 = 0.9;

// Delay between A-Frame's `loaded` and wiring input on its canvas
pub const SCENE_WIRE_DELAY_MS: i32 = 100;
