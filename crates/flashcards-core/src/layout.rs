// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Line formatting: word wrapping and bordered centering.
//!
//! All widths are measured in `char`s.

/// Columns reserved around wrapped text: the two border characters plus
/// breathing room on either side.
const WRAP_MARGIN: usize = 5;

/// The maximum number of characters a wrapped line may hold for a card of
/// the given width.
pub fn wrap_limit(width: usize) -> usize {
    width.saturating_sub(WRAP_MARGIN).max(1)
}

/// Collapse every whitespace run in `text` into a single space and trim
/// both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Greedily wrap `text` into lines of at most `width - 5` characters.
///
/// Whitespace (including newlines and tabs) is collapsed first. Lines only
/// break between words: a word longer than the limit is placed on a line of
/// its own rather than being split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let limit = wrap_limit(width);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= limit {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Pad `text` to `width` with `fill`, putting the extra character on the
/// right when the padding is odd. Text that is already wide enough is
/// returned as is.
fn center(text: &str, width: usize, fill: char) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let padding = width - len;
    let left = padding / 2;
    let right = padding - left;
    let mut out = String::with_capacity(text.len() + padding * fill.len_utf8());
    out.extend(std::iter::repeat_n(fill, left));
    out.push_str(text);
    out.extend(std::iter::repeat_n(fill, right));
    out
}

/// Center `line` within `width - 2` columns of spaces, then center the
/// result within `width` columns of `border`.
pub fn frame(line: &str, width: usize, border: char) -> String {
    let inner = center(line, width.saturating_sub(2), ' ');
    center(&inner, width, border)
}

/// A full-width border line.
pub fn border_line(width: usize, border: char) -> String {
    std::iter::repeat_n(border, width).collect()
}
