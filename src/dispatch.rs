//! Dispatcher: radio id + frequency text → the right transport.

use crate::cat::{encode, CatCommand};
use crate::domain::{ProfileCollection, Response, RigError, RigResult, Route};
use crate::ports::{ProcessRunner, SerialOpener};
use crate::transport::{RigctlSender, SerialSender, TcpSender};

/// Owns one sender per transport and routes each request to one of them.
pub struct Dispatcher<O: SerialOpener, R: ProcessRunner> {
    tcp: TcpSender,
    serial: SerialSender<O>,
    rigctl: RigctlSender<R>,
}

impl<O: SerialOpener, R: ProcessRunner> Dispatcher<O, R> {
    pub fn new(tcp: TcpSender, serial: SerialSender<O>, rigctl: RigctlSender<R>) -> Self {
        Self {
            tcp,
            serial,
            rigctl,
        }
    }

    pub fn serial(&self) -> &SerialSender<O> {
        &self.serial
    }

    pub fn rigctl(&self) -> &RigctlSender<R> {
        &self.rigctl
    }

    /// Set the frequency of the radio named `rig_id`.
    ///
    /// The first profile with a matching id wins. An unknown id, or a
    /// profile missing the fields its transport needs, is a
    /// `RigError::Selection` and no I/O happens. `frequency` is not
    /// validated.
    pub fn dispatch(
        &self,
        profiles: &ProfileCollection,
        rig_id: &str,
        frequency: &str,
    ) -> RigResult<Response> {
        let result = self.route(profiles, rig_id, frequency);
        match &result {
            Ok(resp) => log::info!("{rig_id}: {resp}"),
            Err(e) => log::warn!("{rig_id}: set frequency '{frequency}' failed: {e}"),
        }
        result
    }

    fn route(
        &self,
        profiles: &ProfileCollection,
        rig_id: &str,
        frequency: &str,
    ) -> RigResult<Response> {
        let profile = profiles
            .find(rig_id)
            .ok_or_else(|| RigError::Selection(format!("unknown radio '{rig_id}'")))?;

        let command = encode(&CatCommand::SetFrequencyA(frequency.to_string()));
        match profile.route()? {
            Route::Tcp { host, port } => self.tcp.send(host, port, &command),
            Route::Serial { port, baud_rate } => self.serial.send(port, baud_rate, &command),
            Route::Rigctl { model } => {
                let model = model.unwrap_or(self.rigctl.default_model());
                self.rigctl.send_to_model(model, frequency)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RadioProfile;
    use crate::ports::{ProcessOutput, SerialConnection};
    use std::cell::{Cell, RefCell};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct CountingOpener {
        opened: Cell<usize>,
        written: Arc<Mutex<Vec<u8>>>,
    }

    struct CapturePort(Arc<Mutex<Vec<u8>>>);

    impl SerialConnection for CapturePort {
        fn write(&mut self, data: &[u8]) -> RigResult<usize> {
            self.0.lock().unwrap().extend_from_slice(data);
            Ok(data.len())
        }
        fn read(&mut self, _buf: &mut [u8]) -> RigResult<usize> {
            Ok(0)
        }
        fn close(&mut self) -> RigResult<()> {
            Ok(())
        }
        fn is_connected(&self) -> bool {
            true
        }
    }

    impl SerialOpener for CountingOpener {
        fn open(&self, _port: &str, _baud: u32) -> RigResult<Box<dyn SerialConnection>> {
            self.opened.set(self.opened.get() + 1);
            Ok(Box::new(CapturePort(Arc::clone(&self.written))))
        }
    }

    #[derive(Default)]
    struct CountingRunner {
        args: RefCell<Vec<Vec<String>>>,
    }

    impl ProcessRunner for CountingRunner {
        fn run(&self, _program: &str, args: &[String]) -> RigResult<ProcessOutput> {
            self.args.borrow_mut().push(args.to_vec());
            Ok(ProcessOutput {
                code: Some(0),
                output: String::new(),
            })
        }
    }

    fn make_dispatcher() -> Dispatcher<CountingOpener, CountingRunner> {
        Dispatcher::new(
            TcpSender::new(),
            SerialSender::new(CountingOpener::default()),
            RigctlSender::new(CountingRunner::default()),
        )
    }

    fn profiles() -> ProfileCollection {
        ProfileCollection::new(vec![
            RadioProfile::serial("FT-991A", "/dev/ttyUSB0", 38400),
            RadioProfile::rigctl("IC-7300", Some(3073), Some("7074000")),
            RadioProfile::rigctl("Dummy", None, None),
        ])
    }

    #[test]
    fn unknown_rig_touches_no_transport() {
        let dispatcher = make_dispatcher();
        let err = dispatcher.dispatch(&profiles(), "TS-890S", "14250000").unwrap_err();

        assert!(matches!(err, RigError::Selection(_)));
        assert_eq!(dispatcher.serial().opener().opened.get(), 0);
        assert!(dispatcher.rigctl().runner().args.borrow().is_empty());
    }

    #[test]
    fn serial_profile_gets_formatted_command() {
        let dispatcher = make_dispatcher();
        dispatcher.dispatch(&profiles(), "FT-991A", "14070000").unwrap();

        let opener = dispatcher.serial().opener();
        assert_eq!(opener.opened.get(), 1);
        assert_eq!(*opener.written.lock().unwrap(), b"FA14070000;\n");
    }

    #[test]
    fn empty_frequency_is_not_validated() {
        let dispatcher = make_dispatcher();
        dispatcher.dispatch(&profiles(), "FT-991A", "").unwrap();
        assert_eq!(*dispatcher.serial().opener().written.lock().unwrap(), b"FA;\n");
    }

    #[test]
    fn rigctl_profile_gets_raw_frequency_and_its_model() {
        let dispatcher = make_dispatcher();
        dispatcher.dispatch(&profiles(), "IC-7300", "14250000").unwrap();
        dispatcher.dispatch(&profiles(), "Dummy", "7035000").unwrap();

        let args = dispatcher.rigctl().runner().args.borrow();
        assert_eq!(args[0], ["-m", "3073", "F", "14250000"]);
        assert_eq!(args[1], ["-m", "1", "F", "7035000"]);
        assert_eq!(dispatcher.serial().opener().opened.get(), 0);
    }

    #[test]
    fn unroutable_profile_is_selection_error_without_io() {
        let dispatcher = make_dispatcher();
        let mut broken = RadioProfile::serial("Broken", "/dev/ttyUSB1", 9600);
        broken.serial_port = None;
        let profiles = ProfileCollection::new(vec![broken]);

        let err = dispatcher.dispatch(&profiles, "Broken", "1").unwrap_err();
        assert!(matches!(err, RigError::Selection(_)));
        assert_eq!(dispatcher.serial().opener().opened.get(), 0);
    }
}
