/// Which side of the budget an item sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Income,
    Expense,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    /// Short code used in item keys (`inc-3`) and on the command line.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Income => "inc",
            Self::Expense => "exp",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "inc" | "income" | "+" => Some(Self::Income),
            "exp" | "expense" | "expenses" | "-" => Some(Self::Expense),
            _ => None,
        }
    }

    pub fn all() -> &'static [Category] {
        &[Self::Income, Self::Expense]
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }

    /// Sign shown in front of formatted amounts of this category.
    pub fn sign(&self) -> char {
        match self {
            Self::Income => '+',
            Self::Expense => '-',
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
