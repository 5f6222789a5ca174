use crate::core::division::DivisionFlow;
use crate::core::size::SizeFlow;
use crate::domain::model::RunReport;
use crate::domain::ports::{ConfigProvider, Console};
use crate::utils::error::Result;

pub struct DemoEngine<C: Console, P: ConfigProvider> {
    console: C,
    config: P,
}

impl<C: Console, P: ConfigProvider> DemoEngine<C, P> {
    pub fn new(console: C, config: P) -> Self {
        Self { console, config }
    }

    pub async fn run(&mut self) -> Result<RunReport> {
        tracing::info!("Starting demo run");

        // Division
        let division = DivisionFlow::new(self.config.division_prompt())
            .run(&mut self.console)
            .await?;
        tracing::info!("Division flow finished: {:?}", division);

        // Size
        let size = SizeFlow::new(
            self.config.size_prompt(),
            self.config.closing_message(),
            self.config.size_error_policy(),
        )
        .run(&mut self.console)
        .await?;
        tracing::info!("Size flow finished: {:?}", size);

        Ok(RunReport { division, size })
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }
}
