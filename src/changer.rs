use std::io::{self, Write};

use log::debug;

use crate::{ChangeError, DisplayService, ModeIndex, Resolution};

/// Changes the display resolution to `target`, reporting progress on `out`.
///
/// This is the whole control-flow path: query the current mode, print it,
/// overwrite its resolution, apply persistently, and on failure fall back to
/// listing every mode the OS enumerates. Every failure is terminal: a message
/// is printed and the run ends, with no retry and no rollback.
pub fn change_resolution<S, W>(service: &mut S, out: &mut W, target: Resolution) -> io::Result<()>
where
    S: DisplayService,
    W: Write,
{
    let Some(mut mode) = service.query(ModeIndex::Current) else {
        writeln!(out, "{}", ChangeError::QueryFailed)?;
        return Ok(());
    };
    writeln!(out, "Current {}", mode)?;

    debug!("requesting {} (was {})", target, mode.resolution);
    mode.resolution = target;
    let code = service.apply(&mode);

    if code.is_success() {
        writeln!(out, "Resolution changed successfully.")?;
        return Ok(());
    }

    writeln!(out, "{}", ChangeError::ApplyFailed(code))?;
    writeln!(out, "Available Screen Resolutions:")?;

    let mut listed = 0usize;
    for mode in service.modes() {
        writeln!(out, "{}", mode)?;
        listed += 1;
    }
    debug!("enumerated {} modes", listed);

    if listed == 0 {
        writeln!(out, "{}", ChangeError::NoModesAvailable)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use crate::{ChangeCode, ColorDepth, DisplayMode, ModeIndex, RefreshRate};

    use super::*;

    /// A scripted stand-in for the OS display subsystem
    struct ScriptedDisplay {
        current: Option<DisplayMode>,
        modes: Vec<DisplayMode>,
        apply_code: ChangeCode,
        applied: Vec<DisplayMode>,
        queried: RefCell<Vec<ModeIndex>>,
    }

    impl ScriptedDisplay {
        fn new(current: Option<DisplayMode>, apply_code: ChangeCode) -> Self {
            Self {
                current,
                modes: Vec::new(),
                apply_code,
                applied: Vec::new(),
                queried: RefCell::new(Vec::new()),
            }
        }
    }

    impl DisplayService for ScriptedDisplay {
        fn query(&self, index: ModeIndex) -> Option<DisplayMode> {
            self.queried.borrow_mut().push(index);
            match index {
                ModeIndex::Current => self.current,
                ModeIndex::Nth(n) => self.modes.get(n as usize).copied(),
            }
        }

        fn apply(&mut self, mode: &DisplayMode) -> ChangeCode {
            self.applied.push(*mode);
            self.apply_code
        }
    }

    fn mode(width: u32, height: u32, depth: u32, rate: u32) -> DisplayMode {
        DisplayMode {
            resolution: Resolution::new(width, height),
            color_depth: ColorDepth(depth),
            refresh_rate: RefreshRate(rate),
        }
    }

    fn run(service: &mut ScriptedDisplay, target: Resolution) -> String {
        let mut out = Vec::new();
        change_resolution(service, &mut out, target).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn successful_change_reports_old_and_new_state() {
        let mut service =
            ScriptedDisplay::new(Some(mode(1280, 720, 32, 60)), ChangeCode::SUCCESSFUL);

        let output = run(&mut service, Resolution::new(1920, 1080));

        assert_eq!(
            output,
            "Current Resolution: 1280x720, Color Depth: 32-bit, Refresh Rate: 60Hz\n\
             Resolution changed successfully.\n"
        );
        assert_eq!(service.applied, vec![mode(1920, 1080, 32, 60)]);
    }

    #[test]
    fn failed_change_lists_modes_in_enumeration_order() {
        let mut service =
            ScriptedDisplay::new(Some(mode(1280, 720, 32, 60)), ChangeCode(-2));
        service.modes = vec![mode(640, 480, 16, 60), mode(800, 600, 32, 75)];

        let output = run(&mut service, Resolution::new(7680, 4320));

        assert_eq!(
            output,
            "Current Resolution: 1280x720, Color Depth: 32-bit, Refresh Rate: 60Hz\n\
             Failed to change resolution. Error code: -2\n\
             Available Screen Resolutions:\n\
             Resolution: 640x480, Color Depth: 16-bit, Refresh Rate: 60Hz\n\
             Resolution: 800x600, Color Depth: 32-bit, Refresh Rate: 75Hz\n"
        );
        assert_eq!(
            *service.queried.borrow(),
            vec![
                ModeIndex::Current,
                ModeIndex::Nth(0),
                ModeIndex::Nth(1),
                ModeIndex::Nth(2),
            ]
        );
    }

    #[test]
    fn failed_change_with_no_modes_reports_none_found() {
        let mut service =
            ScriptedDisplay::new(Some(mode(1280, 720, 32, 60)), ChangeCode(-1));

        let output = run(&mut service, Resolution::new(1920, 1080));

        assert_eq!(
            output,
            "Current Resolution: 1280x720, Color Depth: 32-bit, Refresh Rate: 60Hz\n\
             Failed to change resolution. Error code: -1\n\
             Available Screen Resolutions:\n\
             No available screen resolutions found.\n"
        );
    }

    #[test]
    fn query_failure_stops_before_any_apply() {
        let mut service = ScriptedDisplay::new(None, ChangeCode::SUCCESSFUL);

        let output = run(&mut service, Resolution::new(1920, 1080));

        assert_eq!(output, "Unable to get display settings.\n");
        assert!(service.applied.is_empty());
        assert_eq!(*service.queried.borrow(), vec![ModeIndex::Current]);
    }
}
