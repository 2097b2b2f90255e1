const MENU_TITLE: &str = "Available commands:";

/// Actions reachable from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    ShowBalance,
    AddExpense,
    AddIncome,
    CancelLast,
    ShowHistory,
    AddCategory,
    BalanceByCategory,
    Exit,
}

struct MenuEntry {
    code: &'static str,
    command: MenuCommand,
    description: &'static str,
}

const ENTRIES: [MenuEntry; 8] = [
    MenuEntry {
        code: "1",
        command: MenuCommand::ShowBalance,
        description: "Show Balance",
    },
    MenuEntry {
        code: "2",
        command: MenuCommand::AddExpense,
        description: "Add Expense",
    },
    MenuEntry {
        code: "3",
        command: MenuCommand::AddIncome,
        description: "Add Income",
    },
    MenuEntry {
        code: "4",
        command: MenuCommand::CancelLast,
        description: "Cancel Last Transaction",
    },
    MenuEntry {
        code: "5",
        command: MenuCommand::ShowHistory,
        description: "Show History",
    },
    MenuEntry {
        code: "6",
        command: MenuCommand::AddCategory,
        description: "Add Category",
    },
    MenuEntry {
        code: "7",
        command: MenuCommand::BalanceByCategory,
        description: "Show Balance By Category",
    },
    MenuEntry {
        code: "0",
        command: MenuCommand::Exit,
        description: "Exit",
    },
];

impl MenuCommand {
    /// Looks up the command bound to an exact menu code.
    pub fn from_code(code: &str) -> Option<Self> {
        ENTRIES
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.command)
    }
}

/// The numbered menu printed before every command prompt.
pub struct MainMenu;

impl MainMenu {
    pub fn render() -> String {
        let mut lines = Vec::with_capacity(ENTRIES.len() + 1);
        lines.push(MENU_TITLE.to_string());
        lines.extend(
            ENTRIES
                .iter()
                .map(|entry| format!("{}. {}", entry.code, entry.description)),
        );
        lines.join("\n")
    }
}
