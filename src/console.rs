//! Console front end: menu loop, prompts and rendering.
//!
//! A thin adapter over [`LibraryService`]: every action gathers input, calls
//! exactly one service operation and renders the outcome. Domain errors are
//! printed and logged, never fatal.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::{
    config::AppConfig,
    error::{AppError, AppResult},
    models::{CreateBook, RegisterUser, SearchField},
    services::LibraryService,
    snapshot,
};

/// One selectable menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddBook,
    RemoveBook,
    RegisterUser,
    DeregisterUser,
    LendBook,
    ReturnBook,
    SearchBooks,
    ListLoans,
    ListCatalog,
    ListUsers,
    Save,
    Quit,
}

impl MenuChoice {
    /// Parse a menu selection; `None` for anything unknown
    pub fn parse(input: &str) -> Option<MenuChoice> {
        match input.trim() {
            "1" => Some(MenuChoice::AddBook),
            "2" => Some(MenuChoice::RemoveBook),
            "3" => Some(MenuChoice::RegisterUser),
            "4" => Some(MenuChoice::DeregisterUser),
            "5" => Some(MenuChoice::LendBook),
            "6" => Some(MenuChoice::ReturnBook),
            "7" => Some(MenuChoice::SearchBooks),
            "8" => Some(MenuChoice::ListLoans),
            "9" => Some(MenuChoice::ListCatalog),
            "10" => Some(MenuChoice::ListUsers),
            "11" => Some(MenuChoice::Save),
            "0" | "q" | "quit" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

const MENU: &str = "
--- Libris ---
 1. Add book           2. Remove book
 3. Register user      4. Deregister user
 5. Lend book          6. Return book
 7. Search books       8. List a user's loans
 9. List catalog      10. List users
11. Save snapshot      0. Quit
";

pub struct Console {
    service: LibraryService,
    config: AppConfig,
}

impl Console {
    pub fn new(service: LibraryService, config: AppConfig) -> Self {
        Self { service, config }
    }

    /// Run the menu loop until quit or end of input, then save a final
    /// snapshot.
    pub fn run(&mut self) -> AppResult<()> {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            println!("{}", MENU);
            println!(
                "({} available, {} users, {} on loan)",
                self.service.available_count(),
                self.service.user_count(),
                self.service.active_loan_count()
            );
            let Some(line) = read_line(&mut lines, "Select an option")? else {
                break;
            };
            match MenuChoice::parse(&line) {
                Some(MenuChoice::Quit) => break,
                Some(choice) => self.dispatch(choice, &mut lines)?,
                None => println!("Unknown option: {}", line.trim()),
            }
        }

        self.save_snapshot()?;
        Ok(())
    }

    /// Execute one action. Only I/O failures propagate; domain errors are
    /// rendered and the loop continues.
    fn dispatch(
        &mut self,
        choice: MenuChoice,
        lines: &mut impl Iterator<Item = io::Result<String>>,
    ) -> AppResult<()> {
        match choice {
            MenuChoice::AddBook => {
                let Some(title) = read_field(lines, "Title")? else { return Ok(()) };
                let Some(author) = read_field(lines, "Author")? else { return Ok(()) };
                let Some(category) = read_field(lines, "Category")? else { return Ok(()) };
                let Some(isbn) = read_field(lines, "ISBN")? else { return Ok(()) };
                let payload = CreateBook { title, author, category, isbn };
                match self.service.add_book(payload) {
                    Ok(book) => {
                        println!("Added: {}", book);
                        self.autosave()?;
                    }
                    Err(err) => report(&err),
                }
            }
            MenuChoice::RemoveBook => {
                let Some(isbn) = read_field(lines, "ISBN")? else { return Ok(()) };
                match self.service.remove_book(&isbn) {
                    Ok(book) => {
                        println!("Removed: {}", book);
                        self.autosave()?;
                    }
                    Err(err) => report(&err),
                }
            }
            MenuChoice::RegisterUser => {
                let Some(name) = read_field(lines, "Name")? else { return Ok(()) };
                let Some(user_id) = read_field(lines, "User ID")? else { return Ok(()) };
                match self.service.register_user(RegisterUser { name, user_id }) {
                    Ok(()) => {
                        println!("User registered.");
                        self.autosave()?;
                    }
                    Err(err) => report(&err),
                }
            }
            MenuChoice::DeregisterUser => {
                let Some(user_id) = read_field(lines, "User ID")? else { return Ok(()) };
                match self.service.deregister_user(&user_id) {
                    Ok(user) => {
                        println!("Deregistered {}", user);
                        self.autosave()?;
                    }
                    Err(err) => report(&err),
                }
            }
            MenuChoice::LendBook => {
                let Some(user_id) = read_field(lines, "User ID")? else { return Ok(()) };
                let Some(isbn) = read_field(lines, "ISBN")? else { return Ok(()) };
                match self.service.lend_book(&user_id, &isbn) {
                    Ok(loan) => {
                        println!("Lent: {}", loan);
                        self.autosave()?;
                    }
                    Err(err) => report(&err),
                }
            }
            MenuChoice::ReturnBook => {
                let Some(user_id) = read_field(lines, "User ID")? else { return Ok(()) };
                let Some(isbn) = read_field(lines, "ISBN")? else { return Ok(()) };
                match self.service.return_book(&user_id, &isbn) {
                    Ok(book) => {
                        println!("Returned: {}", book);
                        self.autosave()?;
                    }
                    Err(err) => report(&err),
                }
            }
            MenuChoice::SearchBooks => {
                let Some(field) = read_field(lines, "Field (title/author/category)")? else {
                    return Ok(());
                };
                let field: SearchField = match field.parse() {
                    Ok(field) => field,
                    Err(message) => {
                        report(&AppError::Validation(message));
                        return Ok(());
                    }
                };
                let Some(value) = read_field(lines, "Search for")? else { return Ok(()) };
                let results = self.service.search_books(field, &value);
                if results.is_empty() {
                    println!("No books match {} '{}'.", field, value);
                } else {
                    for book in &results {
                        println!("{}", book);
                    }
                }
            }
            MenuChoice::ListLoans => {
                let Some(user_id) = read_field(lines, "User ID")? else { return Ok(()) };
                match self.service.user_loans(&user_id) {
                    Ok([]) => println!("User '{}' has no books on loan.", user_id),
                    Ok(loans) => {
                        for loan in loans {
                            println!("{}", loan);
                        }
                    }
                    Err(err) => report(&err),
                }
            }
            MenuChoice::ListCatalog => {
                if self.service.available_count() == 0 {
                    println!("The catalog is empty.");
                }
                for book in self.service.available_books() {
                    println!("{}", book);
                }
            }
            MenuChoice::ListUsers => {
                if self.service.user_count() == 0 {
                    println!("No users registered.");
                }
                for user in self.service.registered_users() {
                    println!("{} ({} on loan)", user, user.loan_count());
                }
            }
            MenuChoice::Save => {
                self.save_snapshot()?;
                println!("Snapshot saved.");
            }
            MenuChoice::Quit => {}
        }
        Ok(())
    }

    fn autosave(&self) -> AppResult<()> {
        if self.config.storage.autosave {
            self.save_snapshot()?;
        }
        Ok(())
    }

    fn save_snapshot(&self) -> AppResult<()> {
        snapshot::save(
            self.service.library(),
            Path::new(&self.config.storage.snapshot_path),
        )
    }
}

/// Render a domain error to the user and the log
fn report(err: &AppError) {
    println!("Error [{:?}]: {}", err.code(), err);
    tracing::warn!("Operation failed ({:?}): {}", err.code(), err);
}

/// Read one line; `Ok(None)` on end of input
fn read_line(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> AppResult<Option<String>> {
    print!("{}: ", label);
    io::stdout().flush()?;
    match lines.next() {
        None => Ok(None),
        Some(line) => Ok(Some(line?)),
    }
}

/// Read a non-empty trimmed value, re-prompting on blank input
fn read_field(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> AppResult<Option<String>> {
    loop {
        let Some(line) = read_line(lines, label)? else {
            return Ok(None);
        };
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return Ok(Some(trimmed.to_string()));
        }
        println!("Value must not be empty.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_parses_known_options() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AddBook));
        assert_eq!(MenuChoice::parse(" 7 "), Some(MenuChoice::SearchBooks));
        assert_eq!(MenuChoice::parse("10"), Some(MenuChoice::ListUsers));
        assert_eq!(MenuChoice::parse("q"), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::parse("12"), None);
        assert_eq!(MenuChoice::parse("add"), None);
    }
}
