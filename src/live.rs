//! Live meter loop driven by input-change notifications.

use secrecy::SecretString;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::presenter::{VisualState, handle_input_change};
use crate::surface::{DisplaySurface, SurfaceError};

/// Keeps `surface` in step with the password field.
///
/// Draws the empty state first, then evaluates and presents every value
/// received on `input`, one at a time and in arrival order. Stops when
/// `token` is cancelled or every sender is dropped.
///
/// # Returns
/// The number of input changes handled.
///
/// # Errors
/// The first [`SurfaceError`] raised by the surface; the loop stops there.
pub async fn run_live_meter<S: DisplaySurface + ?Sized>(
    surface: &mut S,
    mut input: mpsc::Receiver<SecretString>,
    token: CancellationToken,
) -> Result<usize, SurfaceError> {
    #[cfg(feature = "tracing")]
    tracing::info!("password meter is about to start...");

    VisualState::initial().apply(surface)?;

    let mut handled = 0;
    loop {
        let password = tokio::select! {
            biased;
            _ = token.cancelled() => break,
            next = input.recv() => match next {
                Some(password) => password,
                None => break,
            },
        };
        handle_input_change(surface, &password)?;
        handled += 1;
    }

    #[cfg(feature = "tracing")]
    tracing::info!("password meter stopped after {} input changes", handled);

    Ok(handled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::{Criterion, ProgressPercent};
    use crate::surface::{SurfaceElement, TextSurface};

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test]
    async fn test_live_meter_handles_changes_in_order() {
        let (tx, rx) = mpsc::channel(8);
        for typed in ["A", "Ab", "Abcdefgh1", "Abcdefghijkl1!"] {
            tx.send(secret(typed)).await.expect("channel open");
        }
        drop(tx);

        let mut surface = TextSurface::new();
        let handled = run_live_meter(&mut surface, rx, CancellationToken::new())
            .await
            .expect("surface complete");

        assert_eq!(handled, 4);
        assert_eq!(surface.strength_text(), "Fort");
        assert_eq!(surface.length_hint(), "Au moins 16 caractères");
    }

    #[tokio::test]
    async fn test_live_meter_draws_initial_state() {
        let (tx, rx) = mpsc::channel::<SecretString>(1);
        drop(tx);

        let mut surface = TextSurface::new();
        let handled = run_live_meter(&mut surface, rx, CancellationToken::new())
            .await
            .expect("surface complete");

        assert_eq!(handled, 0);
        assert_eq!(surface.strength_text(), "Saisissez un mot de passe");
        assert_eq!(surface.length_hint(), "Au moins 8 caractères");
        assert_eq!(surface.fill_width(), ProgressPercent::ZERO);
        assert!(!surface.is_valid(Criterion::Lowercase));
    }

    #[tokio::test]
    async fn test_live_meter_stops_on_cancellation() {
        let (tx, rx) = mpsc::channel(4);
        tx.send(secret("Abcdefgh1")).await.expect("channel open");

        let token = CancellationToken::new();
        token.cancel();

        let mut surface = TextSurface::new();
        let handled = run_live_meter(&mut surface, rx, token)
            .await
            .expect("surface complete");

        assert_eq!(handled, 0);
        assert_eq!(surface.strength_text(), "Saisissez un mot de passe");
    }

    #[tokio::test]
    async fn test_live_meter_cancelled_while_waiting() {
        let (tx, rx) = mpsc::channel::<SecretString>(1);
        let token = CancellationToken::new();

        let canceller = token.clone();
        let cancel_task = async move {
            tokio::task::yield_now().await;
            canceller.cancel();
        };

        let mut surface = TextSurface::new();
        let (result, ()) = tokio::join!(run_live_meter(&mut surface, rx, token), cancel_task);

        assert_eq!(result, Ok(0));
        drop(tx);
    }

    #[tokio::test]
    async fn test_live_meter_stops_on_surface_error() {
        let (tx, rx) = mpsc::channel(4);
        tx.send(secret("abc")).await.expect("channel open");
        tx.send(secret("abcd")).await.expect("channel open");
        drop(tx);

        let mut surface = TextSurface::new();
        surface.detach(SurfaceElement::Criterion(Criterion::Special));

        let result = run_live_meter(&mut surface, rx, CancellationToken::new()).await;
        assert_eq!(
            result,
            Err(SurfaceError::MissingElement(SurfaceElement::Criterion(
                Criterion::Special
            )))
        );
    }
}
