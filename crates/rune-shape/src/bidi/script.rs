use unicode_script::{Script, UnicodeScript};

fn is_neutral(script: Script) -> bool {
    matches!(script, Script::Common | Script::Inherited)
}

/// Script of every character in `text`, with Common and Inherited
/// characters taking the script of the closest preceding resolved
/// character, or of the following one when nothing precedes them.
///
/// Text made only of neutral characters keeps their own scripts.
pub fn resolve_scripts(text: &[char]) -> Vec<Script> {
    let mut scripts = Vec::with_capacity(text.len());
    let mut last = None;
    let mut leading_neutrals = false;
    for &c in text {
        let script = c.script();
        if !is_neutral(script) {
            last = Some(script);
            scripts.push(script);
        } else if let Some(last) = last {
            scripts.push(last);
        } else {
            leading_neutrals = true;
            scripts.push(script);
        }
    }

    if leading_neutrals {
        let mut next = None;
        for script in scripts.iter_mut().rev() {
            if !is_neutral(*script) {
                next = Some(*script);
            } else if let Some(next) = next {
                *script = next;
            }
        }
    }
    scripts
}
