use std::sync::Arc;

use chrono::{Local, NaiveDate};
use binwatch_core::{
    model::{Address, ScheduleSnapshot},
    service::ScheduleService,
};

#[derive(Debug, Clone, Copy)]
pub(crate) enum Screen {
    AddressSelect,
    ScheduleView,
}

pub(crate) struct App {
    pub service: Arc<ScheduleService>,

    pub screen: Screen,
    pub addresses: Vec<Address>,
    pub address_list_index: usize,
    pub selected_address: Option<Address>,

    // Previous successful snapshot stays on screen when a reload fails.
    pub snapshot: Option<ScheduleSnapshot>,

    pub simulate: bool,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl App {
    pub(crate) fn new(service: Arc<ScheduleService>) -> Self {
        let addresses = service.addresses();
        Self {
            service,
            screen: Screen::AddressSelect,
            addresses,
            address_list_index: 0,
            selected_address: None,
            snapshot: None,
            simulate: false,
            is_loading: false,
            error_message: None,
        }
    }

    pub(crate) fn reference_day() -> NaiveDate {
        Local::now().date_naive()
    }

    pub(crate) fn select_current_address(&mut self) -> Option<Address> {
        let address = self.addresses.get(self.address_list_index).cloned()?;
        self.selected_address = Some(address.clone());
        self.screen = Screen::ScheduleView;
        Some(address)
    }
}
