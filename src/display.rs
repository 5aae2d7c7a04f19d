use winsafe::{co, GmidxEnum};

use crate::{ChangeCode, ColorDepth, DisplayMode, DisplayService, ModeIndex, RefreshRate, Resolution};

/// The primary display, addressed through the `winuser.h` settings calls with
/// a null device name.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrimaryDisplay;

impl DisplayService for PrimaryDisplay {
    fn query(&self, index: ModeIndex) -> Option<DisplayMode> {
        let mut devmode = winsafe::DEVMODE::default();
        let index = match index {
            ModeIndex::Current => GmidxEnum::Enum(co::ENUM_SETTINGS::CURRENT),
            ModeIndex::Nth(n) => GmidxEnum::Gmidx(n),
        };
        winsafe::EnumDisplaySettings(None, index, &mut devmode).ok()?;

        Some(DisplayMode {
            resolution: Resolution::new(devmode.dmPelsWidth, devmode.dmPelsHeight),
            color_depth: ColorDepth(devmode.dmBitsPerPel),
            refresh_rate: RefreshRate(devmode.dmDisplayFrequency),
        })
    }

    fn apply(&mut self, mode: &DisplayMode) -> ChangeCode {
        let mut devmode = winsafe::DEVMODE::default();
        devmode.dmPelsWidth = mode.resolution.width;
        devmode.dmPelsHeight = mode.resolution.height;
        // Only width and height are marked significant; depth and frequency
        // stay whatever the driver picks.
        devmode.dmFields |= co::DM::PELSWIDTH | co::DM::PELSHEIGHT;

        let result = winsafe::ChangeDisplaySettingsEx(
            None,
            Some(&mut devmode),
            co::CDS::UPDATEREGISTRY,
        );
        match result {
            Ok(_) => ChangeCode::SUCCESSFUL,
            Err(flags) => {
                log::debug!("ChangeDisplaySettingsEx returned {}", flags);
                change_code(flags)
            }
        }
    }
}

/// Maps the returned `DISP_CHANGE` flags back to their numeric `winuser.h`
/// values, which is what gets shown to the user.
fn change_code(flags: co::DISP_CHANGE) -> ChangeCode {
    if flags == co::DISP_CHANGE::RESTART {
        ChangeCode(1)
    } else if flags == co::DISP_CHANGE::BADMODE {
        ChangeCode(-2)
    } else if flags == co::DISP_CHANGE::NOTUPDATED {
        ChangeCode(-3)
    } else if flags == co::DISP_CHANGE::BADFLAGS {
        ChangeCode(-4)
    } else if flags == co::DISP_CHANGE::BADPARAM {
        ChangeCode(-5)
    } else if flags == co::DISP_CHANGE::BADDUALVIEW {
        ChangeCode(-6)
    } else {
        // DISP_CHANGE_FAILED
        ChangeCode(-1)
    }
}
