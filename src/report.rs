//! The bundled LinguaFlash project documentation report.

use crate::builder::DocumentBuilder;
use crate::error::Result;
use crate::model::{Document, Metadata};

/// File name the report is written to when no path is given.
pub const DEFAULT_OUTPUT_FILE: &str = "LinguaFlash_Documentation_Report.docx";

/// Space after the title page, in points.
const TITLE_PAGE_SPACING: f32 = 24.0;

/// Build the LinguaFlash documentation report.
pub fn linguaflash_report() -> Result<Document> {
    let mut metadata = Metadata::with_title("LinguaFlash");
    metadata.subject = Some("Project Documentation Report".to_string());

    let mut doc = DocumentBuilder::new().with_metadata(metadata);

    doc.add_title_page(
        "LinguaFlash",
        [
            "Language Learning Application with Flashcard System",
            "Project Documentation Report",
        ],
        TITLE_PAGE_SPACING,
    )?;

    requirements_analysis(&mut doc)?;
    system_architecture(&mut doc)?;
    mvp_implementation(&mut doc)?;
    testing(&mut doc)?;
    documentation(&mut doc)?;
    final_presentation(&mut doc)?;

    Ok(doc.build())
}

fn requirements_analysis(doc: &mut DocumentBuilder) -> Result<()> {
    doc.add_heading("1. Requirements Analysis", 1)?;

    doc.add_heading("1.1 Functional Requirements", 2)?
        .add_bullet_list([
            "FR-1: Create and manage multiple flashcard decks organized by language pairs (e.g., English \u{2192} Spanish).",
            "FR-2: Add, edit, and persist vocabulary cards with front (source language) and back (translation) content.",
            "FR-3: Study mode allowing users to flip cards to reveal translations and rate their recall (Again / Got it!).",
            "FR-4: Dashboard displaying deck statistics (number of decks, total cards) and quick actions.",
            "FR-5: Persistent data storage using JSON so user data survives application restarts.",
            "FR-6: Sample data for first-time users to demonstrate the application immediately.",
        ]);

    doc.add_heading("1.2 Non-Functional Requirements", 2)?
        .add_bullet_list([
            "NFR-1: Modern, visually appealing user interface using CustomTkinter with dark theme and accent colors.",
            "NFR-2: Responsive layout supporting minimum window size of 900\u{d7}600 pixels.",
            "NFR-3: Cross-platform compatibility (Windows, macOS, Linux) via Python and Tkinter.",
            "NFR-4: Lightweight installation with minimal dependencies (customtkinter, pillow).",
        ]);

    doc.add_heading("1.3 User Personas & Use Cases", 2)?
        .add_paragraph(
            "Primary user: Language learners who want to memorize vocabulary using flashcards. \
             Use cases include creating a new deck (e.g., French vocabulary), adding cards, studying with flip-to-reveal, \
             and tracking session performance (correct/incorrect counts).",
        );
    Ok(())
}

fn system_architecture(doc: &mut DocumentBuilder) -> Result<()> {
    doc.add_heading("2. System Architecture Design", 1)?;

    doc.add_heading("2.1 High-Level Architecture", 2)?
        .add_paragraph(
            "LinguaFlash follows a monolithic desktop application architecture with three main layers: \
             Presentation (UI), Application (Business Logic), and Data (Persistence).",
        );

    doc.add_heading("2.2 Component Diagram", 2)?
        .add_bullet_list([
            "Presentation Layer: LinguaFlashApp (CTk window), screens: Dashboard, Create Deck, Add Cards, Study Mode, Study Complete.",
            "Application Layer: Event handlers for user actions (create deck, add card, flip card, next card, etc.).",
            "Data Layer: load_data(), save_data(), get_sample_data(); file: flashcard_data.json.",
        ]);

    doc.add_heading("2.3 Data Model", 2)?
        .add_paragraph("Data structure stored in flashcard_data.json:")
        .add_paragraph(
            r#"{"decks": {deck_id: {name, from_lang, to_lang}}, "cards": {deck_id: [{front, back}, ...]}}"#,
        )
        .add_paragraph(
            "Deck ID format: deck_{index}_{random}. Cards are stored as lists of {front, back} objects.",
        );

    doc.add_heading("2.4 Technology Stack", 2)?
        .add_bullet_list([
            "Python 3.7+",
            "CustomTkinter 5.2+ for modern GUI widgets",
            "Pillow for image support (optional)",
            "Standard library: json, random, pathlib",
        ]);
    Ok(())
}

fn mvp_implementation(doc: &mut DocumentBuilder) -> Result<()> {
    doc.add_heading("3. MVP (Minimum Viable Product) Implementation", 1)?;

    doc.add_heading("3.1 MVP Scope", 2)?
        .add_bullet_list([
            "Dashboard with deck list, stats (decks count, total cards), and action buttons.",
            "Create Deck: form with name, from language, to language.",
            "Add Cards: select deck, then add front/back pairs with immediate persistence.",
            "Study Mode: flip cards, reveal answer, rate (Again/Got it!), progress bar, session summary.",
            "Sample Spanish Basics deck (10 cards) for first-time demo.",
        ]);

    doc.add_heading("3.2 Implementation Highlights", 2)?
        .add_paragraph(
            "Single-file architecture (main.py) with clear separation: constants, data layer, and LinguaFlashApp class. \
             Reusable UI helpers: _create_header(), _create_back_button(), _create_card_frame(). \
             Screen-based navigation: _clear_main() clears container, then target screen is rendered.",
        );

    doc.add_heading("3.3 Key Methods", 2)?
        .add_bullet_list([
            "show_dashboard() \u{2014} Main hub with stats and deck cards.",
            "_show_create_deck() \u{2014} Deck creation form.",
            "_show_add_cards(deck_id) \u{2014} Add cards to a deck.",
            "_start_study(deck_id) \u{2014} Shuffle cards and begin study session.",
            "_show_study_screen() \u{2014} Render current card, progress, flip/rating buttons.",
            "_show_study_complete() \u{2014} Session summary with correct count and mastery percentage.",
        ]);
    Ok(())
}

fn testing(doc: &mut DocumentBuilder) -> Result<()> {
    doc.add_heading("4. Testing", 1)?;

    doc.add_heading("4.1 Test Strategy", 2)?
        .add_paragraph(
            "Testing was performed through manual execution and exploratory testing. \
             Key flows were validated: deck creation, card addition, study mode navigation, and data persistence.",
        );

    doc.add_heading("4.2 Test Cases Executed", 2)?
        .add_bullet_list([
            "TC-1: Launch application \u{2014} App starts with dashboard and sample deck (if no data file exists).",
            "TC-2: Create new deck \u{2014} Form accepts name and languages; deck appears on dashboard.",
            "TC-3: Add cards \u{2014} Cards are saved and count updates on dashboard.",
            "TC-4: Study mode \u{2014} Cards shuffle, flip works, Again/Got it! advance correctly.",
            "TC-5: Session complete \u{2014} Correct count and percentage display; Study Again and Back to Dashboard work.",
            "TC-6: Data persistence \u{2014} Close and reopen app; decks and cards persist.",
        ]);

    doc.add_heading("4.3 Bug Fixes Applied", 2)?
        .add_paragraph(
            "CTkFrame.configure() does not support padx/pady. \
             Fix: use inner frames with pack(padx=..., pady=...) for padding.",
        );
    Ok(())
}

fn documentation(doc: &mut DocumentBuilder) -> Result<()> {
    doc.add_heading("5. Documentation", 1)?;

    doc.add_heading("5.1 README.md", 2)?
        .add_paragraph(
            "Project README includes: feature list, installation (pip install -r requirements.txt), run command (python main.py), \
             and usage steps for Dashboard, Create Deck, Add Cards, and Study.",
        );

    doc.add_heading("5.2 Inline Code Documentation", 2)?
        .add_paragraph(
            "Docstrings for all major functions and methods (load_data, save_data, get_sample_data, show_dashboard, etc.). \
             Comments for theme constants, data structures, and key logic sections.",
        );

    doc.add_heading("5.3 This Report", 2)?
        .add_paragraph(
            "Comprehensive project documentation covering requirements analysis, system architecture, MVP implementation, \
             testing, and final presentation as requested.",
        );
    Ok(())
}

fn final_presentation(doc: &mut DocumentBuilder) -> Result<()> {
    doc.add_heading("6. Final Presentation", 1)?;

    doc.add_heading("6.1 Product Summary", 2)?
        .add_paragraph(
            "LinguaFlash is a desktop language learning application with a flashcard system. \
             It enables users to create decks by language pair, add vocabulary cards, and study with a flip-to-reveal \
             interface and self-rating (Again / Got it!). The application features a visually striking dark theme with \
             violet, cyan, and amber accents, built with CustomTkinter for a modern look.",
        );

    doc.add_heading("6.2 Deliverables", 2)?
        .add_bullet_list([
            "main.py \u{2014} Main application (~480 lines)",
            "requirements.txt \u{2014} Dependencies (customtkinter, pillow)",
            "README.md \u{2014} User guide",
            "flashcard_data.json \u{2014} Generated at runtime for data persistence",
            "LinguaFlash_Documentation_Report.docx \u{2014} This documentation report",
        ]);

    doc.add_heading("6.3 Future Enhancements", 2)?
        .add_bullet_list([
            "Spaced repetition algorithm (e.g., SM-2) for smarter review scheduling.",
            "Audio pronunciation integration (TTS).",
            "Import/export decks (CSV, JSON).",
            "Edit and delete cards/decks.",
            "Light/dark theme toggle.",
        ]);

    doc.add_heading("6.4 Conclusion", 2)?
        .add_paragraph(
            "The LinguaFlash project successfully delivers an MVP that meets the stated requirements: \
             a functional, visually appealing language learning flashcard application with persistent storage, \
             sample data for instant demonstration, and clear documentation. The application is ready for end-user \
             evaluation and serves as a solid foundation for future enhancements.",
        );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BlockKind;

    #[test]
    fn test_report_outline() {
        let doc = linguaflash_report().unwrap();
        let outline = doc.outline();

        assert_eq!(outline.items.len(), 6);
        assert_eq!(outline.items[0].title, "1. Requirements Analysis");
        assert_eq!(outline.items[0].children.len(), 3);
        assert_eq!(outline.items[5].children.len(), 4);
        assert_eq!(outline.total_items(), 6 + 20);
    }

    #[test]
    fn test_report_title_page() {
        let doc = linguaflash_report().unwrap();
        let preamble = doc.preamble();

        assert_eq!(preamble.len(), 4);
        assert_eq!(preamble[0].kind(), BlockKind::Title);
        assert_eq!(preamble[0].text(), "LinguaFlash");
        assert_eq!(preamble[3].space_after(), Some(TITLE_PAGE_SPACING));
    }

    #[test]
    fn test_report_counts() {
        let stats = linguaflash_report().unwrap().stats();
        assert_eq!(stats.title_count, 1);
        assert_eq!(stats.heading_count, 26);
        assert_eq!(stats.spacer_count, 1);
        assert_eq!(stats.list_item_count, 6 + 4 + 3 + 4 + 5 + 6 + 6 + 5 + 5);
        assert_eq!(stats.paragraph_count, 2 + 13);
    }

    #[test]
    fn test_report_is_deterministic() {
        assert_eq!(linguaflash_report().unwrap(), linguaflash_report().unwrap());
    }
}
