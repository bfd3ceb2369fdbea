//=========================================================================
// Configuration
//=========================================================================
//
// Process-wide, read-only settings shared by transitions.
//
// Flow:
//   startup ──init(Settings)──> SETTINGS (OnceLock) ──settings()──> readers
//
// `init` must run before anything reads the settings; the first read
// locks in the defaults.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::OnceLock;
use std::time::Duration;

use log::info;

//=== Internal Dependencies ===============================================

use crate::core::animation::Easing;
use crate::core::error::ConfigError;
use crate::core::scene::Point;

//=== Constants ===========================================================

/// Stage width used for slide distances when nothing else is configured.
pub const DEFAULT_STAGE_WIDTH: f32 = 800.0;

/// Stage height used for slide distances when nothing else is configured.
pub const DEFAULT_STAGE_HEIGHT: f32 = 600.0;

/// Duration used by transition constructors that take no explicit duration.
pub const DEFAULT_TRANSITION_DURATION: Duration = Duration::from_millis(500);

static SETTINGS: OnceLock<Settings> = OnceLock::new();

//=== Settings ============================================================

/// Read-only values shared by every director in the process.
///
/// # Default Values
///
/// - **Stage size**: 800 x 600
/// - **Transition duration**: 500 ms
/// - **Easing**: [`Easing::EaseInOut`]
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    stage_size: Point,
    transition_duration: Duration,
    easing: Easing,
}

impl Settings {
    /// Sets the logical stage size used to compute slide offsets.
    pub fn with_stage_size(mut self, width: f32, height: f32) -> Self {
        self.stage_size = Point::new(width, height);
        self
    }

    /// Sets the duration `Default` transitions run for.
    pub fn with_transition_duration(mut self, duration: Duration) -> Self {
        self.transition_duration = duration;
        self
    }

    /// Sets the easing curve new transitions start with.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn stage_size(&self) -> Point {
        self.stage_size
    }

    pub fn transition_duration(&self) -> Duration {
        self.transition_duration
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Checks that the stage size is positive and finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Point { x, y } = self.stage_size;
        if !(x.is_finite() && y.is_finite() && x > 0.0 && y > 0.0) {
            return Err(ConfigError::Invalid {
                name: "stage_size",
                reason: format!("expected positive finite size, got {}x{}", x, y),
            });
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            stage_size: Point::new(DEFAULT_STAGE_WIDTH, DEFAULT_STAGE_HEIGHT),
            transition_duration: DEFAULT_TRANSITION_DURATION,
            easing: Easing::EaseInOut,
        }
    }
}

//=== Global Access =======================================================

/// Installs the process-wide settings.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] if validation fails, and
/// [`ConfigError::AlreadyInitialized`] if settings were installed or read
/// before this call.
pub fn init(values: Settings) -> Result<(), ConfigError> {
    values.validate()?;
    SETTINGS
        .set(values)
        .map_err(|_| ConfigError::AlreadyInitialized)?;

    info!("Director settings initialized: {:?}", settings());
    Ok(())
}

/// Returns the process-wide settings, installing defaults on first read.
pub fn settings() -> &'static Settings {
    SETTINGS.get_or_init(Settings::default)
}

//=== Tests ===============================================================
