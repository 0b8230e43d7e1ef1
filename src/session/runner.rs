use std::io::{BufRead, Write};

use log::{error, info, warn};

use crate::errors::StoreError;
use crate::store::{BoundedStore, SeekOrigin};

use super::outcome::Outcome;
use super::request::{parse_number, Request};

pub type SessionResult = Result<Outcome, StoreError>;

/// Drives a sequence of requests against one store.
///
/// The loop never enforces bounds itself: every range decision is delegated
/// to the store and its outcome is relayed untranslated. A failed operation
/// is reported and the session keeps accepting requests; only end-of-input
/// ends it, and that is the designed termination, not an error.
pub struct SessionLoop<'a> {
    store: &'a mut BoundedStore,
    /// Requests served so far, reported when the session closes.
    served: u64,
}

impl<'a> SessionLoop<'a> {
    pub fn new(store: &'a mut BoundedStore) -> Self {
        SessionLoop { store, served: 0 }
    }

    pub fn served(&self) -> u64 {
        self.served
    }

    /// Resolves one request against the store.
    pub fn dispatch(&mut self, request: Request) -> SessionResult {
        self.served += 1;
        match request {
            Request::Read(len) => {
                let len = usize::try_from(len).map_err(|_| StoreError::OutOfRangeLow)?;
                // Capacity bounds the allocation; an oversized request fails
                // in the store before the shorter destination matters
                let mut data = vec![0u8; len.min(self.store.capacity())];
                let transferred = self.store.read(len, &mut data)?;
                data.truncate(transferred);
                Ok(Outcome::Read { transferred, data })
            }
            Request::Write(data) => {
                let transferred = self.store.write(&data)?;
                Ok(Outcome::Write { transferred })
            }
            Request::Seek { offset, origin } => {
                let origin = origin.parse::<SeekOrigin>()?;
                let new_position = self.store.seek(offset, origin)?;
                Ok(Outcome::Seek { new_position })
            }
        }
    }

    /// Interactive request protocol: prompt for a choice character, then for
    /// the chosen operation's parameters, dispatch, report, re-prompt.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> Result<(), StoreError> {
        info!("session open");
        loop {
            writeln!(output, "option?")?;
            output.flush()?;
            let Some(choice) = read_line(&mut input)? else {
                break;
            };

            match choice.trim() {
                "r" => {
                    write!(output, "Enter the number of bytes you want to read: ")?;
                    output.flush()?;
                    let Some(token) = read_line(&mut input)? else {
                        break;
                    };
                    self.report(Request::Read(parse_number(&token)), &mut output)?;
                }
                "w" => {
                    write!(output, "Enter the data you want to write: ")?;
                    output.flush()?;
                    let Some(line) = read_line(&mut input)? else {
                        break;
                    };
                    self.report(Request::Write(line.into_bytes()), &mut output)?;
                }
                "s" => {
                    write!(output, "Enter an offset value: ")?;
                    output.flush()?;
                    let Some(offset) = read_line(&mut input)? else {
                        break;
                    };
                    write!(output, "Enter a value for whence: ")?;
                    output.flush()?;
                    let Some(whence) = read_line(&mut input)? else {
                        break;
                    };
                    let request = Request::Seek {
                        offset: parse_number(&offset),
                        origin: whence.trim().to_string(),
                    };
                    self.report(request, &mut output)?;
                }
                "" => {}
                other => warn!("unknown option {other:?}, expected r, w or s"),
            }
        }
        info!("session closed after {} requests", self.served);
        Ok(())
    }

    fn report<W: Write>(&mut self, request: Request, output: &mut W) -> Result<(), StoreError> {
        match self.dispatch(request) {
            Ok(Outcome::Read { transferred, data }) => {
                info!("read {transferred} bytes");
                writeln!(output, "{}", String::from_utf8_lossy(&data))?;
            }
            Ok(Outcome::Write { transferred }) => {
                info!("wrote {transferred} bytes");
            }
            Ok(Outcome::Seek { new_position }) => {
                info!("cursor now at {new_position}");
            }
            Err(err) => {
                error!("{err}");
            }
        }
        Ok(())
    }
}

/// Reads one line from the request source, without its newline.
/// `None` means end-of-input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, StoreError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::shared::logger::setup_logger;

    #[test]
    fn test_dispatch_write_seek_read_round_trip() {
        setup_logger();
        let mut store = BoundedStore::default();
        let mut session = SessionLoop::new(&mut store);

        let outcome = session.dispatch(Request::Write(b"hello".to_vec())).unwrap();
        assert_eq!(outcome, Outcome::Write { transferred: 5 });

        let outcome = session
            .dispatch(Request::Seek {
                offset: 0,
                origin: "SEEK_SET".to_string(),
            })
            .unwrap();
        assert_eq!(outcome, Outcome::Seek { new_position: 0 });

        let outcome = session.dispatch(Request::Read(5)).unwrap();
        assert_eq!(
            outcome,
            Outcome::Read {
                transferred: 5,
                data: b"hello".to_vec()
            }
        );
        assert_eq!(session.served(), 3);
    }

    #[test]
    fn test_dispatch_rejects_negative_read_counts() {
        let mut store = BoundedStore::default();
        let mut session = SessionLoop::new(&mut store);

        let err = session.dispatch(Request::Read(-1)).unwrap_err();
        assert!(matches!(err, StoreError::OutOfRangeLow));
    }

    #[test]
    fn test_dispatch_rejects_bogus_origins_before_the_store() {
        let mut store = BoundedStore::default();
        store.seek(7, SeekOrigin::Start).unwrap();

        let mut session = SessionLoop::new(&mut store);
        let err = session
            .dispatch(Request::Seek {
                offset: 0,
                origin: "BOGUS".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidOrigin));

        drop(session);
        assert_eq!(store.cursor(), 7);
    }

    #[test]
    fn test_session_continues_after_a_failed_operation() {
        let mut store = BoundedStore::default();
        let mut session = SessionLoop::new(&mut store);

        let err = session.dispatch(Request::Read(2000)).unwrap_err();
        assert!(matches!(err, StoreError::OutOfRangeHigh));

        let outcome = session.dispatch(Request::Read(4)).unwrap();
        assert_eq!(
            outcome,
            Outcome::Read {
                transferred: 4,
                data: vec![0u8; 4]
            }
        );
    }

    #[test]
    fn test_run_round_trip_script() {
        setup_logger();
        let mut store = BoundedStore::default();
        let mut session = SessionLoop::new(&mut store);

        let script = "w\nhello\ns\n0\nSEEK_SET\nr\n5\n";
        let mut output = Vec::new();
        session.run(Cursor::new(script), &mut output).unwrap();
        assert_eq!(session.served(), 3);

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("option?"));
        assert!(output.contains("hello"));

        drop(session);
        assert_eq!(store.cursor(), 5);
    }

    #[test]
    fn test_run_ends_cleanly_on_empty_input() {
        let mut store = BoundedStore::default();
        let mut session = SessionLoop::new(&mut store);

        let mut output = Vec::new();
        session.run(Cursor::new(""), &mut output).unwrap();
        assert_eq!(session.served(), 0);
    }

    #[test]
    fn test_run_survives_a_rejected_seek() {
        let mut store = BoundedStore::default();
        let mut session = SessionLoop::new(&mut store);

        // Bad whence, then a read that should still be served
        let script = "s\n0\nBOGUS\nr\n3\n";
        let mut output = Vec::new();
        session.run(Cursor::new(script), &mut output).unwrap();
        assert_eq!(session.served(), 2);

        drop(session);
        assert_eq!(store.cursor(), 3);
    }

    #[test]
    fn test_run_skips_unknown_options() {
        let mut store = BoundedStore::default();
        let mut session = SessionLoop::new(&mut store);

        let script = "x\n\nr\n2\n";
        let mut output = Vec::new();
        session.run(Cursor::new(script), &mut output).unwrap();
        assert_eq!(session.served(), 1);
    }

    #[test]
    fn test_run_treats_malformed_counts_as_zero() {
        let mut store = BoundedStore::default();
        let mut session = SessionLoop::new(&mut store);

        let script = "r\nnot-a-number\n";
        let mut output = Vec::new();
        session.run(Cursor::new(script), &mut output).unwrap();
        assert_eq!(session.served(), 1);

        drop(session);
        assert_eq!(store.cursor(), 0);
    }
}
