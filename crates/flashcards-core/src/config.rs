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

/// Layout parameters shared by every card in a session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Total width of a card, borders included.
    pub max_width: usize,
    /// Minimum number of lines in the content block.
    pub min_content_height: usize,
    /// The character used for borders.
    pub border: char,
}

impl LayoutConfig {
    pub const DEFAULT_MAX_WIDTH: usize = 70;
    pub const DEFAULT_MIN_CONTENT_HEIGHT: usize = 6;
    pub const DEFAULT_BORDER: char = '*';
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_width: Self::DEFAULT_MAX_WIDTH,
            min_content_height: Self::DEFAULT_MIN_CONTENT_HEIGHT,
            border: Self::DEFAULT_BORDER,
        }
    }
}
