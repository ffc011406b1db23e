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

/// Whether a card's content block shows the answer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Revealed,
}

impl Visibility {
    pub fn reveal(self) -> Self {
        Visibility::Revealed
    }

    pub fn hide(self) -> Self {
        Visibility::Hidden
    }

    /// The other state.
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Hidden => self.reveal(),
            Visibility::Revealed => self.hide(),
        }
    }

    pub fn is_revealed(self) -> bool {
        self == Visibility::Revealed
    }
}
