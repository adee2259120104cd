use std::fmt;

/// Every action the dispatcher knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Go,
    Get,
    Drop,
    Examine,
    Open,
    Close,
    Lock,
    Unlock,
    Hit,
    Inventory,
    Look,
    Quit,
}

impl Verb {
    pub const ALL: [Verb; 12] = [
        Verb::Go,
        Verb::Get,
        Verb::Drop,
        Verb::Examine,
        Verb::Open,
        Verb::Close,
        Verb::Lock,
        Verb::Unlock,
        Verb::Hit,
        Verb::Inventory,
        Verb::Look,
        Verb::Quit,
    ];

    /// The word used when the game talks back about this verb.
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Go => "go",
            Verb::Get => "get",
            Verb::Drop => "drop",
            Verb::Examine => "examine",
            Verb::Open => "open",
            Verb::Close => "close",
            Verb::Lock => "lock",
            Verb::Unlock => "unlock",
            Verb::Hit => "hit",
            Verb::Inventory => "inventory",
            Verb::Look => "look",
            Verb::Quit => "quit",
        }
    }

    /// Words that map onto this verb besides its own name.
    pub fn synonyms(self) -> &'static [&'static str] {
        match self {
            Verb::Go => &["walk"],
            Verb::Get => &["take"],
            Verb::Examine => &["x"],
            Verb::Hit => &["break"],
            Verb::Inventory => &["i"],
            Verb::Look => &["l"],
            Verb::Drop
            | Verb::Open
            | Verb::Close
            | Verb::Lock
            | Verb::Unlock
            | Verb::Quit => &[],
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed line of input. Any slot may be empty; a missing verb means the
/// input was not understood at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Command {
    pub verb: Option<Verb>,
    pub object: Option<String>,
    pub preposition: Option<String>,
    pub target: Option<String>,
}

impl Command {
    pub fn is_recognized(&self) -> bool {
        self.verb.is_some()
    }

    pub fn object(&self) -> Option<&str> {
        self.object.as_deref()
    }

    pub fn preposition(&self) -> Option<&str> {
        self.preposition.as_deref()
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = [
            self.verb.map(Verb::as_str),
            self.object(),
            self.preposition(),
            self.target(),
        ]
        .into_iter()
        .flatten()
        .collect();
        f.write_str(&parts.join(" "))
    }
}
