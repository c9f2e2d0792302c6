use crate::project::AddonPath;

/// Renders a project path as a build-macro call: `QPATHTOF(<relative>)` for
/// paths inside the current component, `QPATHTOEF(<component>,<relative>)`
/// when referencing another component. Returns `None` for paths outside an
/// `addons` tree, which callers treat as "wrong context", not an error.
pub fn convert_macro_path(path: &str, external: bool) -> Option<String> {
    let addon_path = AddonPath::parse(path)?;
    let relative = addon_path.relative();

    let macro_call = if external {
        format!("QPATHTOEF({},{})", addon_path.component, relative)
    } else {
        format!("QPATHTOF({})", relative)
    };

    Some(macro_call)
}
