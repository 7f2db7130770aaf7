use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn data_path(&self) -> &str;
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    /// `(min, max, step)` of the payload range slider.
    fn slider(&self) -> (f64, f64, f64);

    fn bind_addr(&self) -> String {
        format!("{}:{}", self.host(), self.port())
    }
}
