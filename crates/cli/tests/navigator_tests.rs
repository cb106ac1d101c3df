#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::io::Cursor;

    use walrus_prompt_cli::command_selection::{
        prompt_for_command_choice, CommandChoice, Frame, MenuKey, Screen,
    };
    use walrus_prompt_core::catalog::{Catalog, Strategy};
    use walrus_prompt_core::collector::collect_command_args;
    use walrus_prompt_core::error::Result;
    use walrus_prompt_core::prompt::{Prompter, ReaderLines};

    struct ScriptedScreen {
        keys: VecDeque<MenuKey>,
        selected_rows: Vec<String>,
    }

    impl ScriptedScreen {
        fn new(keys: impl IntoIterator<Item = MenuKey>) -> Self {
            Self {
                keys: keys.into_iter().collect(),
                selected_rows: Vec::new(),
            }
        }
    }

    impl Screen for ScriptedScreen {
        fn size(&self) -> Result<(u16, u16)> {
            Ok((100, 8))
        }

        fn draw(&mut self, frame: &Frame) -> Result<()> {
            let selected: Vec<&String> = frame
                .rows
                .iter()
                .filter(|row| row.is_selected)
                .map(|row| &row.text)
                .collect();
            assert_eq!(selected.len(), 1, "exactly one row is highlighted");
            self.selected_rows.push(selected[0].clone());
            Ok(())
        }

        fn read_key(&mut self) -> Result<MenuKey> {
            Ok(self.keys.pop_front().unwrap_or(MenuKey::Interrupt))
        }
    }

    #[test]
    fn test_every_command_is_reachable_and_collectable() {
        let catalog = Catalog::builtin().unwrap();

        for (index, spec) in catalog.commands().enumerate() {
            let keys = std::iter::repeat(MenuKey::Down)
                .take(index)
                .chain(std::iter::once(MenuKey::Confirm));
            let mut screen = ScriptedScreen::new(keys);

            let choice = prompt_for_command_choice(&mut screen, &catalog).unwrap();
            let CommandChoice::Command(chosen) = choice else {
                panic!("expected {} but the menu exited", spec.name);
            };
            assert_eq!(chosen.name, spec.name);

            // The highlighted row stays visible while scrolling in a small window
            assert_eq!(screen.selected_rows.len(), index + 1);
            assert!(screen.selected_rows[index].starts_with(&format!("> {}:", spec.name)));

            if spec.strategy == Strategy::Generic {
                let mut answers: Vec<String> = spec
                    .required_positionals
                    .iter()
                    .map(|label| label.to_lowercase())
                    .collect();
                answers.push(String::new());
                let input = answers.join("\n") + "\n";

                let mut prompter =
                    Prompter::new(ReaderLines::new(Cursor::new(input.into_bytes())), Vec::new());
                let args = collect_command_args(&mut prompter, chosen).unwrap();

                let expected: Vec<String> = spec
                    .required_positionals
                    .iter()
                    .map(|label| label.to_lowercase())
                    .collect();
                assert_eq!(args.into_vec(), expected, "{}", spec.name);
            }
        }
    }

    #[test]
    fn test_down_past_last_row_returns_to_first() {
        let catalog = Catalog::builtin().unwrap();
        let rows = catalog.len() + 1;

        let keys = std::iter::repeat(MenuKey::Down)
            .take(rows)
            .chain(std::iter::once(MenuKey::Confirm));
        let mut screen = ScriptedScreen::new(keys);

        let choice = prompt_for_command_choice(&mut screen, &catalog).unwrap();
        assert_eq!(choice.to_string(), "json");
    }

    #[test]
    fn test_exit_row_returns_sentinel() {
        let catalog = Catalog::builtin().unwrap();
        let mut screen = ScriptedScreen::new([MenuKey::Up, MenuKey::Confirm]);

        let choice = prompt_for_command_choice(&mut screen, &catalog).unwrap();
        assert!(matches!(choice, CommandChoice::Exit));
        assert!(screen.selected_rows[1].starts_with("> exit:"));
    }
}
