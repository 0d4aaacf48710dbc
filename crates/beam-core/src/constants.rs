use std::time::Duration;

// Beam engine tuning constants shared by every diagram.

// Beam motion
pub const BEAM_SPEED: f32 = 0.2; // fraction of the path per second (full loop every 5 s)
pub const COMET_HALF_LENGTH: f64 = 12.5; // arc-length either side of the beam head

// Path geometry
pub const CORNER_RADIUS: f32 = 15.0; // rounded corner of the orthogonal policy
pub const PATH_ACCURACY: f64 = 0.1; // arc-length solver tolerance, in path units

// Proximity activation
pub const TOUCH_THRESHOLD: f32 = 25.0; // beam-to-target distance that counts as a touch
pub const SERVICES_ACTIVE_DURATION: Duration = Duration::from_millis(800);
pub const SOLVYN_ACTIVE_DURATION: Duration = Duration::from_millis(600);

// Diagram shapes
pub const SERVICES_TARGET_COUNT: usize = 4;
pub const SOLVYN_TARGET_COUNT: usize = 13;
pub const SERVICES_START_STAGGER: Duration = Duration::from_millis(1250);
pub const SOLVYN_START_STAGGER: Duration = Duration::from_millis(400);

// Measurement
pub const POSITION_TOLERANCE: f32 = 1.0; // re-measurements closer than this are "unchanged"
pub const MEASURE_RETRY_DELAYS_MS: [u32; 5] = [100, 300, 600, 1000, 2000]; // offsets from mount
