//! Contract bindings for the oracle and caller contracts.
//!
//! Minimal interfaces: only the functions and events the relay touches.

use alloy_sol_types::sol;

sol! {
    #[sol(rpc)]
    contract EthPriceOracle {
        event GetLatestEthPriceEvent(address callerAddress, uint256 id);
        event SetLatestEthPriceEvent(uint256 ethPrice, address callerAddress, uint256 id);

        function owner() external view returns (address);
        function getLatestEthPrice() external returns (uint256);
        function setLatestEthPrice(uint256 _ethPrice, address _callerAddress, uint256 _id) external;
    }

    #[sol(rpc)]
    contract CallerContract {
        function owner() external view returns (address);
        function setOracleInstanceAddress(address _oracleInstanceAddress) external;
        function updateEthPrice() external;
    }
}
