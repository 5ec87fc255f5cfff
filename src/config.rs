/// 命令行工具配置
pub struct Config {
    /// 默认日志过滤指令，可被 RUST_LOG 覆盖
    pub log_filter: &'static str,
    /// 默认是否缩进输出
    pub pretty_output: bool,
    /// 允许读取的最大载荷（字节）
    pub max_payload_bytes: u64,
    /// 从标准输入读取时使用的文件名
    pub stdin_marker: &'static str,
}

/// 全局配置实例
pub static CONFIG: Config = Config {
    log_filter: "statuspage_models=info",
    pretty_output: true,
    max_payload_bytes: 16 * 1024 * 1024,
    stdin_marker: "-",
};
