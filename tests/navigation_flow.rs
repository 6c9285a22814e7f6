use std::time::Duration;

use cardhub::card_tui::{App, AppEvent};
use cardhub::cards::Screen;
use cardhub::config::Config;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn app_with_delay(dismiss_delay_ms: u64) -> App {
    App::new(Config {
        dismiss_delay_ms,
        ..Config::default()
    })
    .unwrap()
}

async fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(key(code)).await.unwrap();
}

async fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c)).await;
    }
}

fn rendered(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 50)).unwrap();
    terminal.draw(|f| app.draw(f)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer.get(x, y).symbol());
        }
        text.push('\n');
    }
    text
}

/// List -> Detail for the credit card -> Services tab -> item `index`
async fn open_service(app: &mut App, index: usize) {
    press(app, KeyCode::Enter).await;
    press(app, KeyCode::Tab).await;
    for _ in 0..index {
        press(app, KeyCode::Down).await;
    }
    press(app, KeyCode::Enter).await;
}

#[tokio::test]
async fn back_from_payment_lands_on_detail() {
    let mut app = app_with_delay(2000);
    press(&mut app, KeyCode::Enter).await;
    assert_eq!(app.current_screen(), Screen::Detail);
    assert_eq!(app.selected_card().map(|c| c.id.as_str()), Some("1"));

    press(&mut app, KeyCode::Char('p')).await;
    assert_eq!(app.current_screen(), Screen::Payment);
    assert!(rendered(&mut app).contains("750,000 LAK"));

    press(&mut app, KeyCode::Esc).await;
    assert_eq!(app.current_screen(), Screen::Detail);
    press(&mut app, KeyCode::Esc).await;
    assert_eq!(app.current_screen(), Screen::List);
}

#[tokio::test]
async fn debit_card_detail_hides_credit_rows() {
    let mut app = app_with_delay(2000);
    press(&mut app, KeyCode::Down).await;
    press(&mut app, KeyCode::Enter).await;
    assert_eq!(app.selected_card().map(|c| c.id.as_str()), Some("2"));

    let screen = rendered(&mut app);
    assert!(screen.contains("Phongsavanh Mastercard debit"));
    assert!(!screen.contains("Available Credit Limit"));
    assert!(!screen.contains("Total Amount Due"));

    press(&mut app, KeyCode::Char('p')).await;
    assert_eq!(app.current_screen(), Screen::Detail);
}

#[tokio::test]
async fn short_current_pin_shows_inline_error() {
    let mut app = app_with_delay(2000);
    open_service(&mut app, 2).await;
    assert_eq!(app.current_screen(), Screen::ChangePin);

    type_str(&mut app, "123").await;
    press(&mut app, KeyCode::Enter).await;
    assert_eq!(app.current_screen(), Screen::ChangePin);
    assert!(app.notice().is_none());
    assert!(rendered(&mut app).contains("Current PIN must be 6 digits"));
}

#[tokio::test]
async fn status_change_needs_confirmation() {
    let mut app = app_with_delay(2000);
    open_service(&mut app, 0).await;
    assert_eq!(app.current_screen(), Screen::Status);

    press(&mut app, KeyCode::Enter).await;
    assert!(rendered(&mut app).contains("Are you sure you want to temporarily locked this card?"));

    press(&mut app, KeyCode::Char('n')).await;
    assert!(rendered(&mut app).contains("Current Status: Active"));
    assert_eq!(app.current_screen(), Screen::Status);

    press(&mut app, KeyCode::Enter).await;
    press(&mut app, KeyCode::Char('y')).await;
    let screen = rendered(&mut app);
    assert!(screen.contains("Current Status: Temporarily Locked"));
    assert!(screen.contains("Unlock Card"));
}

#[tokio::test]
async fn success_notice_returns_to_detail_after_delay() {
    let mut app = app_with_delay(20);
    open_service(&mut app, 2).await;
    type_str(&mut app, "111111").await;
    press(&mut app, KeyCode::Tab).await;
    type_str(&mut app, "222222").await;
    press(&mut app, KeyCode::Tab).await;
    type_str(&mut app, "222222").await;
    press(&mut app, KeyCode::Enter).await;

    assert_eq!(app.notice().map(|n| n.title.as_str()), Some("PIN Changed!"));
    assert!(app.dismiss_pending());
    assert!(rendered(&mut app).contains("Your PIN has been changed successfully."));

    // Keys other than Esc/Enter are swallowed while the notice is up
    press(&mut app, KeyCode::Char('1')).await;
    assert_eq!(app.current_screen(), Screen::ChangePin);

    let event = tokio::time::timeout(Duration::from_secs(2), app.next_app_event())
        .await
        .unwrap()
        .unwrap();
    assert!(matches!(event, AppEvent::DismissElapsed(_)));
    app.handle_app_event(event).unwrap();

    assert!(app.notice().is_none());
    assert_eq!(app.current_screen(), Screen::Detail);
}

#[tokio::test]
async fn dismissing_early_cancels_the_timer() {
    let mut app = app_with_delay(30);
    open_service(&mut app, 3).await;
    assert_eq!(app.current_screen(), Screen::Limits);
    press(&mut app, KeyCode::Enter).await;
    assert_eq!(app.notice().map(|n| n.title.as_str()), Some("Limits Updated!"));

    press(&mut app, KeyCode::Esc).await;
    assert_eq!(app.current_screen(), Screen::Detail);
    assert!(!app.dismiss_pending());

    // Move on before the old timer would have fired
    press(&mut app, KeyCode::Tab).await;
    press(&mut app, KeyCode::Down).await;
    press(&mut app, KeyCode::Enter).await;
    assert_eq!(app.current_screen(), Screen::UpdateInfo);

    let late = tokio::time::timeout(Duration::from_millis(100), app.next_app_event()).await;
    assert!(late.is_err(), "cancelled timer still fired");
    assert_eq!(app.current_screen(), Screen::UpdateInfo);
}

#[tokio::test]
async fn statement_tab_opens_full_statement() {
    let mut app = app_with_delay(2000);
    press(&mut app, KeyCode::Enter).await;
    press(&mut app, KeyCode::BackTab).await;
    for _ in 0..3 {
        press(&mut app, KeyCode::Down).await;
    }
    press(&mut app, KeyCode::Enter).await;
    assert_eq!(app.current_screen(), Screen::Statement);

    let screen = rendered(&mut app);
    assert!(screen.contains("06/11/2025 - 05/12/2025"));
    assert!(screen.contains("6,950,000 LAK"));

    press(&mut app, KeyCode::Char('p')).await;
    assert_eq!(app.current_screen(), Screen::Payment);
    press(&mut app, KeyCode::Esc).await;
    assert_eq!(app.current_screen(), Screen::Detail);
}

#[tokio::test]
async fn searched_period_reaches_full_statement() {
    let mut app = app_with_delay(2000);
    press(&mut app, KeyCode::Enter).await;
    press(&mut app, KeyCode::BackTab).await;

    // From date 2025-11-06 -> 2025-11-01
    press(&mut app, KeyCode::Backspace).await;
    press(&mut app, KeyCode::Backspace).await;
    type_str(&mut app, "01").await;
    for _ in 0..3 {
        press(&mut app, KeyCode::Down).await;
    }
    press(&mut app, KeyCode::Enter).await;
    assert_eq!(app.current_screen(), Screen::Statement);

    let screen = rendered(&mut app);
    assert!(screen.contains("01/11/2025 - 05/12/2025"));
    assert!(!screen.contains("06/11/2025 - 05/12/2025"));
    assert!(screen.contains("6,950,000 LAK"));

    press(&mut app, KeyCode::Esc).await;
    assert_eq!(app.current_screen(), Screen::Detail);
    assert_eq!(app.statement_period().from.to_string(), "2025-11-01");
}
