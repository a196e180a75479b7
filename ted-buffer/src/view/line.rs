use crate::width::{display_width, TAB_WIDTH};

pub fn expand(content: &[char]) -> String {
    let mut result = String::with_capacity(content.len());
    for c in content {
        match c {
            '\t' => result.push_str(&" ".repeat(TAB_WIDTH)),
            c if display_width(*c) == 0 => {}
            c => result.push(*c),
        }
    }
    result
}
