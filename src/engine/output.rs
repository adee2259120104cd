use serde::Serialize;

/// One chunk of text for the front end to lay out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum OutputBlock {
    Title(String),
    Text(String),
    Exits(String),
}

#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, s: impl Into<String>) {
        self.push_nonblank(s.into(), OutputBlock::Title);
    }

    pub fn say(&mut self, s: impl Into<String>) {
        self.push_nonblank(s.into(), OutputBlock::Text);
    }

    /// Replaces any earlier exits line; there is only ever one, and it goes last.
    pub fn set_exits(&mut self, s: impl Into<String>) {
        let s = s.into();
        if s.trim().is_empty() {
            return;
        }
        self.blocks.retain(|b| !matches!(b, OutputBlock::Exits(_)));
        self.blocks.push(OutputBlock::Exits(s));
    }

    /// All the text, one block per line.
    pub fn text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| match b {
                OutputBlock::Title(s) | OutputBlock::Text(s) | OutputBlock::Exits(s) => s.as_str(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn push_nonblank(&mut self, s: String, block: fn(String) -> OutputBlock) {
        if !s.trim().is_empty() {
            self.blocks.push(block(s));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_dropped() {
        let mut out = Output::new();
        out.say("   ");
        out.title("");
        assert!(out.blocks.is_empty());
    }

    #[test]
    fn only_one_exits_block_survives() {
        let mut out = Output::new();
        out.set_exits("Possible exits are: out.");
        out.say("You go out.");
        out.set_exits("Possible exits are: in.");

        assert_eq!(
            out.blocks,
            vec![
                OutputBlock::Text("You go out.".into()),
                OutputBlock::Exits("Possible exits are: in.".into()),
            ]
        );
        assert_eq!(out.text(), "You go out.\nPossible exits are: in.");
    }
}
